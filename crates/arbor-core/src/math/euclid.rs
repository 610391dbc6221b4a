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

//! # Euclidean GCD
//!
//! The greatest common divisor over unsigned primitive integers, in two
//! equivalent formulations: the iterative remainder-swap loop (the default)
//! and the textbook recursion. Both run in `O(log min(a, b))` divisions.

use num_traits::{PrimInt, Unsigned};

/// Computes the greatest common divisor of `a` and `b`.
///
/// Iterative Euclidean algorithm: replace the pair `(a, b)` with
/// `(b, a mod b)` until the second component reaches zero. By convention
/// `gcd(a, 0) == a` and `gcd(0, 0) == 0`.
///
/// # Examples
///
/// ```rust
/// # use arbor_core::math::euclid::gcd;
///
/// assert_eq!(gcd(123_456_789u64, 987_654_321u64), 9);
/// assert_eq!(gcd(12u32, 18u32), 6);
/// assert_eq!(gcd(7u32, 0u32), 7);
/// ```
pub fn gcd<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt + Unsigned,
{
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Computes the greatest common divisor of `a` and `b` recursively.
///
/// Equivalent to [`gcd`]; recursion depth is `O(log min(a, b))`, so the
/// call stack is never a concern for primitive widths.
///
/// # Examples
///
/// ```rust
/// # use arbor_core::math::euclid::gcd_recursive;
///
/// assert_eq!(gcd_recursive(123_456_789u64, 987_654_321u64), 9);
/// assert_eq!(gcd_recursive(0u32, 5u32), 5);
/// ```
pub fn gcd_recursive<T>(a: T, b: T) -> T
where
    T: PrimInt + Unsigned,
{
    let lo = a.min(b);
    let hi = a.max(b);
    if lo == T::zero() {
        return hi;
    }
    gcd_recursive(lo, hi % lo)
}
