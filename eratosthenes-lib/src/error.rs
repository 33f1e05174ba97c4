use std::{
    collections::TryReserveError,
    io,
};

use thiserror::Error;

/// Failure of the sieve engine itself.
///
/// The only way a valid bound can fail is by asking for a presence array
/// the process cannot hold.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("cannot allocate a presence array for bound {bound}")]
    Allocation {
        bound: usize,
        #[source]
        source: Option<TryReserveError>,
    },
}

/// Rejected user input, raised before the engine is ever invoked.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no bound was given")]
    Empty,
    #[error("bound must not be negative, found {0:?}")]
    Negative(String),
    #[error("bound {0:?} is too large")]
    TooLarge(String),
    #[error("bound must be a whole number, found {0:?}")]
    Malformed(String),
    #[error("failed to read the bound")]
    Io(#[from] io::Error),
}
