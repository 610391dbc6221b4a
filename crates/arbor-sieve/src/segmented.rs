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

use crate::eratosthenes::primes_up_to;
use fixedbitset::FixedBitSet;

/// Returns all primes in the inclusive range `[lo, hi]`, in increasing
/// order.
///
/// Segmented sieve: base primes up to `√hi` come from the classic sieve,
/// then each base prime marks its multiples inside the segment, starting
/// at the larger of `p²` and the first multiple at or above `lo` (so base
/// primes that fall inside the segment survive). Memory is one bit per
/// candidate in the segment plus the base primes;
/// `O((hi-lo) log log hi + sqrt(hi) log log sqrt(hi))` time.
///
/// An empty range (`lo > hi`) or one that ends below 2 yields no primes;
/// a `lo` below 2 is clamped up to 2.
///
/// # Examples
///
/// ```rust
/// # use arbor_sieve::segmented::primes_in_range;
///
/// assert_eq!(primes_in_range(10, 20), vec![11, 13, 17, 19]);
/// assert_eq!(primes_in_range(0, 10), vec![2, 3, 5, 7]);
/// assert_eq!(primes_in_range(20, 10), Vec::<u64>::new());
/// ```
pub fn primes_in_range(lo: u64, hi: u64) -> Vec<u64> {
    if hi < 2 || lo > hi {
        return Vec::new();
    }
    let lo = lo.max(2);

    // One extra above the float root covers any rounding shortfall.
    let root = (hi as f64).sqrt() as u64 + 1;
    let base_primes = primes_up_to(root);

    let count = (hi - lo + 1) as usize;
    let mut composite = FixedBitSet::with_capacity(count);

    for &p in &base_primes {
        // First multiple of p inside the segment, but never p itself.
        // Checked steps: near u64::MAX the next multiple can wrap.
        let Some(first) = lo.div_ceil(p).max(p).checked_mul(p) else {
            continue;
        };
        let mut multiple = first;
        while multiple <= hi {
            composite.insert((multiple - lo) as usize);
            match multiple.checked_add(p) {
                Some(next) => multiple = next,
                None => break,
            }
        }
    }

    (0..count)
        .filter(|&offset| !composite.contains(offset))
        .map(|offset| lo + offset as u64)
        .collect()
}
