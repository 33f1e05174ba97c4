use std::fmt;

use crate::sieve::{
    Primes,
    FIRST_PRIME,
};

/// The trailing line of every report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    count: usize,
    bound: usize,
}

impl Summary {
    pub fn new(count: usize, bound: usize) -> Self {
        Summary { count, bound }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There are {} prime numbers between {} and {}.",
            self.count,
            FIRST_PRIME,
            self.bound,
        )
    }
}

/// Text rendering of a sieve result: one prime per line, then the summary.
pub struct Report<'a> {
    primes: &'a Primes,
}

impl<'a> Report<'a> {
    pub fn new(primes: &'a Primes) -> Self {
        Report { primes }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prime in self.primes {
            writeln!(f, "{}", prime)?;
        }
        writeln!(f, "{}", self.primes.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::sieve;

    #[test]
    fn summary_line() {
        assert_eq!(
            Summary::new(4, 10).to_string(),
            "There are 4 prime numbers between 2 and 10.",
        );
    }

    #[test]
    fn report_lists_primes_before_summary() {
        let primes = sieve(10).unwrap();
        assert_eq!(
            Report::new(&primes).to_string(),
            "2\n3\n5\n7\nThere are 4 prime numbers between 2 and 10.\n",
        );
    }

    #[test]
    fn empty_report() {
        let primes = sieve(1).unwrap();
        assert_eq!(
            Report::new(&primes).to_string(),
            "There are 0 prime numbers between 2 and 1.\n",
        );
    }
}
