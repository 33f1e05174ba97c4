//! This crate provides a procedural macro that runs the Sieve of
//! Eratosthenes while compiling, embedding the result as an array.
//!
//! # Overview
//!
//! `prime_table!` takes an integer literal bound, optionally preceded by
//! an element type and a semicolon:
//!
//! * `prime_table!(BOUND)` is a `[usize; K]` of every prime up to and
//!   including `BOUND`.
//!
//! * `prime_table!(TYPE; BOUND)` uses `TYPE` for the elements, which must
//!   be one of `u8`, `u16`, `u32`, `u64`, `u128`, or `usize`, and must be
//!   able to hold the largest prime.
//!
//! Bounds above 1048576 are rejected, as is anything that is not a
//! non-negative integer literal. The expansion is a constant expression.
//!
//! # Example
//!
//! ```
//! use eratosthenes_macros::prime_table;
//!
//! const SMALL_PRIMES: [u8; 4] = prime_table!(u8; 10);
//! assert_eq!(SMALL_PRIMES, [2, 3, 5, 7]);
//! ```

extern crate proc_macro;

/// Expands to an array of every prime up to the given bound.
#[proc_macro]
pub fn prime_table(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match eratosthenes_lib::make_prime_table(&input.into()) {
        Ok(value) => value,
        Err(value) => value,
    }.into()
}
