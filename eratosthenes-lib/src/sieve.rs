use std::{
    iter::FusedIterator,
    slice,
    vec,
};

use crate::{
    error::SieveError,
    report::Summary,
};

/// Smallest prime, and the first index of the presence array that is ever read.
pub const FIRST_PRIME: usize = 2;

/// Progress of a [`Sieve`] through its presence array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Visiting `2..=limit`; multiples of every prime found are crossed out.
    Sieving,
    /// Visiting `limit + 1..=bound`; flags are only read.
    Collecting,
    /// Every index has been visited and the flags are final.
    Done,
}

/// A Sieve of Eratosthenes over `0..=bound`, yielding primes in ascending
/// order as they are discovered.
///
/// Crossing out happens lazily: the multiples of a prime `p` are only
/// struck when the iterator reaches `p`. Until the sieve leaves
/// [`Phase::Sieving`], a cleared flag means "composite" but a set flag
/// means nothing yet.
#[derive(Clone, Debug)]
pub struct Sieve {
    presence: Vec<bool>,
    limit: usize,
    cursor: usize,
}

impl Sieve {
    /// Allocates the presence array for `bound`, every flag set.
    pub fn new(bound: usize) -> Result<Self, SieveError> {
        let len = bound
            .checked_add(1)
            .ok_or(SieveError::Allocation { bound, source: None })?;
        let mut presence = Vec::new();
        presence
            .try_reserve_exact(len)
            .map_err(|source| SieveError::Allocation { bound, source: Some(source) })?;
        presence.resize(len, true);

        Ok(Sieve {
            presence,
            limit: integer_sqrt(bound),
            cursor: FIRST_PRIME,
        })
    }

    pub fn bound(&self) -> usize {
        self.presence.len() - 1
    }

    /// Largest index whose multiples are ever crossed out, `floor(sqrt(bound))`.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn phase(&self) -> Phase {
        if self.cursor > self.bound() {
            Phase::Done
        } else if self.cursor <= self.limit {
            Phase::Sieving
        } else {
            Phase::Collecting
        }
    }

    /// Whether `index` is still a candidate prime. Indices below 2 and past
    /// the bound never are.
    pub fn is_candidate(&self, index: usize) -> bool {
        index >= FIRST_PRIME && self.presence.get(index).copied().unwrap_or(false)
    }

    /// Runs the sieve to completion.
    pub fn into_primes(self) -> Primes {
        let bound = self.bound();
        Primes {
            bound,
            primes: self.collect(),
        }
    }

    fn cross_out(&mut self, prime: usize) {
        let bound = self.bound();
        // prime <= sqrt(bound), so the first multiple cannot overflow
        for multiple in (prime * 2..=bound).step_by(prime) {
            self.presence[multiple] = false;
        }
    }
}

impl Iterator for Sieve {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let bound = self.bound();
        while self.cursor <= bound {
            let candidate = self.cursor;
            self.cursor += 1;
            if !self.presence[candidate] {
                continue;
            }
            if candidate <= self.limit {
                self.cross_out(candidate);
            }
            return Some(candidate);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.bound() + 1).saturating_sub(self.cursor)))
    }
}

impl FusedIterator for Sieve {}

/// Every prime in `[2, bound]`, ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Primes {
    bound: usize,
    primes: Vec<usize>,
}

impl Primes {
    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn count(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.primes
    }

    pub fn iter(&self) -> slice::Iter<'_, usize> {
        self.primes.iter()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.primes
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.count(), self.bound)
    }
}

impl IntoIterator for Primes {
    type Item = usize;
    type IntoIter = vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a usize;
    type IntoIter = slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}

/// Computes every prime in `[2, bound]`.
///
/// A bound below 2 yields an empty result. The only failure is the
/// presence array not fitting in memory.
pub fn sieve(bound: usize) -> Result<Primes, SieveError> {
    Ok(Sieve::new(bound)?.into_primes())
}

/// `floor(sqrt(n))`, exact for every `usize`.
///
/// The floating point estimate can land one off for large `n`, so it is
/// nudged until `root * root <= n < (root + 1) * (root + 1)`.
pub fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .map_or(false, |square| square <= n)
    {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime_by_trial_division(value: usize) -> bool {
        value >= FIRST_PRIME && (2..value).all(|divisor| value % divisor != 0)
    }

    fn primes(bound: usize) -> Vec<usize> {
        sieve(bound).unwrap().into_vec()
    }

    #[test]
    fn no_primes_below_two() {
        for bound in 0..2 {
            let result = sieve(bound).unwrap();
            assert!(result.is_empty());
            assert_eq!(result.count(), 0);
            assert_eq!(result.bound(), bound);
        }
    }

    #[test]
    fn small_bounds() {
        assert_eq!(primes(2), vec![2]);
        assert_eq!(primes(3), vec![2, 3]);
        assert_eq!(primes(4), vec![2, 3]);
        assert_eq!(primes(10), vec![2, 3, 5, 7]);
        assert_eq!(sieve(10).unwrap().count(), 4);
        assert_eq!(primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(sieve(30).unwrap().count(), 10);
    }

    #[test]
    fn perfect_square_bounds() {
        assert_eq!(primes(25), vec![2, 3, 5, 7, 11, 13, 17, 19, 23]);
        assert_eq!(primes(49), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
        assert_eq!(*primes(121).last().unwrap(), 113);
        assert_eq!(*primes(169).last().unwrap(), 167);
    }

    #[test]
    fn matches_trial_division() {
        for bound in 0..=600 {
            let expected: Vec<usize> = (0..=bound)
                .filter(|&value| is_prime_by_trial_division(value))
                .collect();
            assert_eq!(primes(bound), expected, "bound {}", bound);
        }
    }

    #[test]
    fn strictly_increasing_and_prime() {
        let result = primes(5_000);
        assert!(result.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(result.iter().all(|&value| is_prime_by_trial_division(value)));
        assert_eq!(result.len(), 669);
    }

    #[test]
    fn repeated_runs_agree() {
        assert_eq!(sieve(1_000).unwrap(), sieve(1_000).unwrap());
    }

    #[test]
    fn phases() {
        let mut sieve = Sieve::new(30).unwrap();
        assert_eq!(sieve.limit(), 5);
        assert_eq!(sieve.phase(), Phase::Sieving);
        assert_eq!(sieve.by_ref().take(3).collect::<Vec<_>>(), vec![2, 3, 5]);
        assert_eq!(sieve.phase(), Phase::Collecting);
        for composite in &[4, 6, 9, 10, 15, 25, 30] {
            assert!(!sieve.is_candidate(*composite), "{}", composite);
        }
        assert!(sieve.is_candidate(29));
        assert_eq!(sieve.by_ref().count(), 7);
        assert_eq!(sieve.phase(), Phase::Done);
        assert_eq!(sieve.next(), None);
    }

    #[test]
    fn degenerate_sieves_are_done() {
        for bound in 0..2 {
            let mut sieve = Sieve::new(bound).unwrap();
            assert_eq!(sieve.phase(), Phase::Done);
            assert!(!sieve.is_candidate(0));
            assert!(!sieve.is_candidate(1));
            assert_eq!(sieve.next(), None);
        }
    }

    #[test]
    fn unrepresentable_bound() {
        match Sieve::new(usize::MAX) {
            Err(SieveError::Allocation { bound, source: None }) => assert_eq!(bound, usize::MAX),
            other => panic!("Expected allocation failure, got {:?}", other),
        }
    }

    #[test]
    fn refused_allocation() {
        match Sieve::new(usize::MAX - 1) {
            Err(SieveError::Allocation { bound, source: Some(_) }) => assert_eq!(bound, usize::MAX - 1),
            other => panic!("Expected allocation failure, got {:?}", other),
        }
        assert!(sieve(usize::MAX - 1).is_err());
    }

    #[test]
    fn square_roots() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(3), 1);
        assert_eq!(integer_sqrt(24), 4);
        assert_eq!(integer_sqrt(25), 5);
        assert_eq!(integer_sqrt(26), 5);
        for root in (1usize..65_536).step_by(997) {
            assert_eq!(integer_sqrt(root * root), root);
            assert_eq!(integer_sqrt(root * root - 1), root - 1);
        }
        let root = integer_sqrt(usize::MAX);
        assert!(root.checked_mul(root).is_some());
        assert!((root + 1).checked_mul(root + 1).is_none());
    }
}
