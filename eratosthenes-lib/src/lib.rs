//! The Sieve of Eratosthenes, along with the pieces the `eratosthenes`
//! program and the [`eratosthenes-macros`] crate build on.
//!
//! # Overview
//!
//! * [`sieve`] computes every prime in `[2, bound]` in one call. [`Sieve`]
//!   is the same computation as an iterator, yielding each prime as it is
//!   discovered.
//!
//! * [`parse_bound`] and [`read_bound`] turn user input into a bound,
//!   rejecting anything that is not a non-negative integer with an
//!   [`InputError`]. The engine never sees malformed input.
//!
//! * [`Report`] renders a result the way the program prints it.
//!
//! [`eratosthenes-macros`]: ../eratosthenes_macros/index.html
//!
//! # Example
//!
//! ```
//! let primes = eratosthenes_lib::sieve(30)?;
//! assert_eq!(primes.as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! assert_eq!(
//!     primes.summary().to_string(),
//!     "There are 10 prime numbers between 2 and 30.",
//! );
//! # Ok::<(), eratosthenes_lib::SieveError>(())
//! ```

mod error;
mod input;
mod report;
mod sieve;
mod table;
mod traits;

pub use self::{
    error::{
        InputError,
        SieveError,
    },
    input::{
        parse_bound,
        read_bound,
    },
    report::{
        Report,
        Summary,
    },
    sieve::{
        integer_sqrt,
        sieve,
        Phase,
        Primes,
        Sieve,
        FIRST_PRIME,
    },
    table::{
        make_prime_table,
        MAX_TABLE_BOUND,
    },
};
