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

use fixedbitset::FixedBitSet;

/// Returns all primes `p <= limit` in increasing order.
///
/// Classic sieve of Eratosthenes: each prime `p` marks its multiples
/// starting at `p²` (everything smaller has a smaller prime factor and is
/// already marked). `O(n log log n)` time, one bit of scratch per
/// candidate.
///
/// # Examples
///
/// ```rust
/// # use arbor_sieve::eratosthenes::primes_up_to;
///
/// assert_eq!(primes_up_to(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert_eq!(primes_up_to(1), Vec::<u64>::new());
/// ```
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let n = limit as usize;
    let mut composite = FixedBitSet::with_capacity(n + 1);
    let mut primes = Vec::new();

    for candidate in 2..=n {
        if composite.contains(candidate) {
            continue;
        }
        primes.push(candidate as u64);

        let mut multiple = candidate.saturating_mul(candidate);
        while multiple <= n {
            composite.insert(multiple);
            multiple += candidate;
        }
    }
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_limits() {
        assert_eq!(primes_up_to(0), Vec::<u64>::new());
        assert_eq!(primes_up_to(1), Vec::<u64>::new());
        assert_eq!(primes_up_to(2), vec![2]);
        assert_eq!(primes_up_to(3), vec![2, 3]);
    }

    #[test]
    fn test_first_primes() {
        assert_eq!(
            primes_up_to(50),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_limit_on_a_prime_is_inclusive() {
        let primes = primes_up_to(97);
        assert_eq!(primes.last(), Some(&97));
    }

    #[test]
    fn test_prime_counting_checkpoints() {
        // π(10^k) reference values.
        assert_eq!(primes_up_to(10).len(), 4);
        assert_eq!(primes_up_to(100).len(), 25);
        assert_eq!(primes_up_to(1_000).len(), 168);
        assert_eq!(primes_up_to(10_000).len(), 1_229);
        assert_eq!(primes_up_to(100_000).len(), 9_592);
    }

    #[test]
    fn test_output_is_strictly_increasing() {
        let primes = primes_up_to(10_000);
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_agrees_with_trial_division() {
        let sieved = primes_up_to(500);
        let trial: Vec<u64> = (2..=500u64)
            .filter(|&x| (2..x).take_while(|d| d * d <= x).all(|d| x % d != 0))
            .collect();
        assert_eq!(sieved, trial);
    }
}
