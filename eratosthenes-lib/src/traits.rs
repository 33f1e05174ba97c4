use std::fmt::Display;

use proc_macro2::{
    Span,
    TokenStream,
};

/// A `compile_error!` invocation reporting `msg` at `span`.
pub(super) fn compile_error(span: Span, msg: impl Display) -> TokenStream {
    syn::Error::new(span, msg).to_compile_error()
}

pub(super) trait OrCompileError<T>: Sized {
    fn or_compile_error(self, span: Span, msg: impl Display) -> Result<T, TokenStream>;
}

impl<T, E: Display> OrCompileError<T> for Result<T, E> {
    #[inline(always)]
    fn or_compile_error(self, span: Span, msg: impl Display) -> Result<T, TokenStream> {
        self.map_err(|err| compile_error(span, format_args!("{}: {}", msg, err)))
    }
}

impl<T> OrCompileError<T> for Option<T> {
    #[inline(always)]
    fn or_compile_error(self, span: Span, msg: impl Display) -> Result<T, TokenStream> {
        self.ok_or_else(|| compile_error(span, msg))
    }
}
