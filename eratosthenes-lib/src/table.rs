use proc_macro2::{
    Ident,
    Literal,
    Span,
    TokenStream,
    TokenTree,
};
use quote::{
    quote,
    ToTokens,
};
use smallvec::SmallVec;
use syn::Lit;

use crate::{
    sieve::sieve,
    traits::*,
};

/// Largest bound `prime_table!` accepts.
pub const MAX_TABLE_BOUND: usize = 1 << 20;

const DEFAULT_ELEMENT: &str = "usize";

const ELEMENT_TYPES: &[(&str, u128)] = &[
    ("u8", u8::MAX as u128),
    ("u16", u16::MAX as u128),
    ("u32", u32::MAX as u128),
    ("u64", u64::MAX as u128),
    ("u128", u128::MAX),
    ("usize", usize::MAX as u128),
];

#[doc(hidden)]
pub fn make_prime_table(input: &TokenStream) -> Result<TokenStream, TokenStream> {
    let tokens: SmallVec<[TokenTree; 3]> = input.clone().into_iter().collect();
    let (element, literal) = match tokens.as_slice() {
        [] => return Err(compile_error(
            Span::call_site(),
            "No bound provided, expected `prime_table!(BOUND)` or `prime_table!(TYPE; BOUND)`",
        )),
        [TokenTree::Literal(literal)] => (None, literal),
        [TokenTree::Ident(element), TokenTree::Punct(separator), TokenTree::Literal(literal)]
            if separator.as_char() == ';' => (Some(element), literal),
        [TokenTree::Punct(sign), ..] if sign.as_char() == '-' =>
            return Err(compile_error(sign.span(), "Bound must not be negative")),
        [first, ..] => return Err(compile_error(
            first.span(),
            format_args!("Expected `BOUND` or `TYPE; BOUND`, received: {}", input),
        )),
    };

    let bound = match Lit::new(literal.clone()) {
        Lit::Int(bound) => bound
            .base10_parse::<usize>()
            .or_compile_error(literal.span(), "Bound does not fit in usize")?,
        bound => return Err(compile_error(
            literal.span(),
            format_args!("Expected an integer bound, received: {}", bound.into_token_stream()),
        )),
    };
    if bound > MAX_TABLE_BOUND {
        return Err(compile_error(
            literal.span(),
            format_args!("Bound {} exceeds the table limit of {}", bound, MAX_TABLE_BOUND),
        ));
    }

    let (element, max) = match element {
        None => (Ident::new(DEFAULT_ELEMENT, Span::call_site()), usize::MAX as u128),
        Some(element) => {
            let name = element.to_string();
            let max = ELEMENT_TYPES
                .iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|&(_, max)| max)
                .or_compile_error(element.span(), format_args!(
                    "Unsupported element type {}, expected one of u8, u16, u32, u64, u128, or usize",
                    name,
                ))?;
            (element.clone(), max)
        },
    };

    let primes = sieve(bound).or_compile_error(literal.span(), "Failed to sieve")?;
    if let Some(&largest) = primes.as_slice().last() {
        if largest as u128 > max {
            return Err(compile_error(
                element.span(),
                format_args!("Prime {} does not fit in {}", largest, element),
            ));
        }
    }

    let len = primes.count();
    let entries = primes.iter().map(|&prime| Literal::usize_unsuffixed(prime));
    Ok(quote! {
        {
            const PRIME_TABLE: [#element; #len] = [#(#entries),*];
            PRIME_TABLE
        }
    })
}
