use std::io;

use eratosthenes_lib::{
    InputError,
    SieveError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Sieve(#[from] SieveError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
