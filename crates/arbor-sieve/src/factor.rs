// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Smallest-prime-factor tables.
//!
//! A [`SmallestFactorTable`] is sieved once for a limit and then answers
//! smallest-factor, primality, and full-factorization lookups for every
//! value it covers. Lookups outside the table (or below 2, where no prime
//! factor exists) return `None` rather than panicking.

/// A table of smallest prime factors for every integer up to a limit.
///
/// Sieved in `O(n log log n)`: every value starts as its own smallest
/// factor, and each prime `p ≤ √n` claims the still-unclaimed multiples
/// of `p` from `p²` upward. A value equal to its own entry is prime.
///
/// # Examples
///
/// ```rust
/// # use arbor_sieve::factor::SmallestFactorTable;
///
/// let table = SmallestFactorTable::new(100);
/// assert_eq!(table.smallest_factor(84), Some(2));
/// assert_eq!(table.smallest_factor(91), Some(7));
/// assert!(table.is_prime(97));
/// assert_eq!(table.factorize(84), Some(vec![(2, 2), (3, 1), (7, 1)]));
/// ```
#[derive(Clone, Debug)]
pub struct SmallestFactorTable {
    spf: Vec<u64>,
}

impl SmallestFactorTable {
    /// Sieves the smallest-prime-factor table for `2..=limit`.
    pub fn new(limit: u64) -> Self {
        let n = limit as usize;
        let mut spf: Vec<u64> = (0..=limit).collect();

        let mut p = 2usize;
        while p * p <= n {
            // Still its own smallest factor means p is prime.
            if spf[p] == p as u64 {
                let mut multiple = p * p;
                while multiple <= n {
                    if spf[multiple] == multiple as u64 {
                        spf[multiple] = p as u64;
                    }
                    multiple += p;
                }
            }
            p += 1;
        }
        Self { spf }
    }

    /// Returns the largest value the table covers.
    #[inline]
    pub fn limit(&self) -> u64 {
        (self.spf.len() - 1) as u64
    }

    /// Returns the smallest prime factor of `value`.
    ///
    /// `None` for values below 2 (no prime factor exists) and for values
    /// beyond the table limit.
    pub fn smallest_factor(&self, value: u64) -> Option<u64> {
        if value < 2 || value > self.limit() {
            return None;
        }
        Some(self.spf[value as usize])
    }

    /// Returns `true` if `value` is prime.
    ///
    /// Values below 2 or beyond the table limit are reported non-prime;
    /// for values the table does not cover, use a sieve sized to them.
    pub fn is_prime(&self, value: u64) -> bool {
        self.smallest_factor(value) == Some(value)
    }

    /// Returns the prime factorization of `value` as `(prime, exponent)`
    /// pairs in increasing prime order.
    ///
    /// Peels the smallest prime factor repeatedly, `O(log value)`
    /// divisions. `Some(vec![])` for 1 (the empty product); `None` for 0
    /// and for values beyond the table limit.
    pub fn factorize(&self, value: u64) -> Option<Vec<(u64, u32)>> {
        if value == 0 || value > self.limit() {
            return None;
        }

        let mut rest = value;
        let mut factors = Vec::new();
        while rest > 1 {
            let prime = self.spf[rest as usize];
            let mut exponent = 0u32;
            while rest % prime == 0 {
                rest /= prime;
                exponent += 1;
            }
            factors.push((prime, exponent));
        }
        Some(factors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eratosthenes::primes_up_to;

    #[test]
    fn test_smallest_factors() {
        let table = SmallestFactorTable::new(60);
        assert_eq!(table.smallest_factor(2), Some(2));
        assert_eq!(table.smallest_factor(15), Some(3));
        assert_eq!(table.smallest_factor(49), Some(7));
        assert_eq!(table.smallest_factor(59), Some(59));
        assert_eq!(table.smallest_factor(60), Some(2));
    }

    #[test]
    fn test_lookups_outside_the_table() {
        let table = SmallestFactorTable::new(10);
        assert_eq!(table.smallest_factor(0), None);
        assert_eq!(table.smallest_factor(1), None);
        assert_eq!(table.smallest_factor(11), None);
        assert!(!table.is_prime(11));
    }

    #[test]
    fn test_primality_agrees_with_sieve() {
        let limit = 2_000;
        let table = SmallestFactorTable::new(limit);
        let primes = primes_up_to(limit);
        for value in 0..=limit {
            assert_eq!(
                table.is_prime(value),
                primes.binary_search(&value).is_ok(),
                "primality of {}",
                value
            );
        }
    }

    #[test]
    fn test_factorize() {
        let table = SmallestFactorTable::new(1_000);
        assert_eq!(table.factorize(1), Some(vec![]));
        assert_eq!(table.factorize(2), Some(vec![(2, 1)]));
        assert_eq!(table.factorize(360), Some(vec![(2, 3), (3, 2), (5, 1)]));
        assert_eq!(table.factorize(997), Some(vec![(997, 1)]));
        assert_eq!(table.factorize(0), None);
        assert_eq!(table.factorize(1_001), None);
    }

    #[test]
    fn test_factorization_multiplies_back() {
        let table = SmallestFactorTable::new(5_000);
        for value in 1..=5_000u64 {
            let product: u64 = table
                .factorize(value)
                .unwrap()
                .into_iter()
                .map(|(p, e)| p.pow(e))
                .product();
            assert_eq!(product, value);
        }
    }

    #[test]
    fn test_tiny_limits() {
        let table = SmallestFactorTable::new(0);
        assert_eq!(table.limit(), 0);
        assert_eq!(table.smallest_factor(2), None);

        let table = SmallestFactorTable::new(2);
        assert!(table.is_prime(2));
    }
}
