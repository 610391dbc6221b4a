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

//! # Binary Multiplication and Exponentiation
//!
//! Shift-and-add multiplication and square-and-multiply exponentiation over
//! unsigned primitive integers, with modular variants that keep every
//! intermediate value reduced. All four run in `O(log rhs)` /
//! `O(log exp)` word operations.
//!
//! The modular variants differ in which products they can afford:
//!
//! - [`mod_mul`] never forms the full product `a * b`. It doubles `a`
//!   modulo `m` instead, so it stays correct whenever `m <= T::MAX / 2`,
//!   including operand pairs whose product would overflow `T`.
//! - [`mod_pow`] multiplies residues directly (that is what makes it
//!   `O(log exp)`), so `(m - 1)²` must fit in `T`. For a larger modulus,
//!   widen the type or route the multiplications through [`mod_mul`].

use num_traits::{PrimInt, Unsigned};

/// Multiplies `a` by `b` using binary ("Russian peasant") multiplication.
///
/// Accumulates shifted copies of `a`, one per set bit of `b`. Overflow
/// behaves like the primitive `+`/`<<` operators (panics in debug builds,
/// wraps in release builds), so the true product must fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use arbor_core::math::modular::binary_mul;
///
/// assert_eq!(binary_mul(13u64, 11u64), 143);
/// assert_eq!(binary_mul(0u32, 999u32), 0);
/// ```
pub fn binary_mul<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt + Unsigned,
{
    let mut result = T::zero();
    while b > T::zero() {
        if b & T::one() == T::one() {
            result = result + a;
        }
        b = b >> 1;
        if b > T::zero() {
            a = a << 1;
        }
    }
    result
}

/// Raises `base` to the power `exp` by squaring.
///
/// Overflow behaves like the primitive `*` operator, so the true power
/// must fit in `T`. `binary_pow(x, 0) == 1` for every `x`, including 0.
///
/// # Examples
///
/// ```rust
/// # use arbor_core::math::modular::binary_pow;
///
/// assert_eq!(binary_pow(2u64, 30u64), 1_073_741_824);
/// assert_eq!(binary_pow(5u32, 0u32), 1);
/// ```
pub fn binary_pow<T>(mut base: T, mut exp: T) -> T
where
    T: PrimInt + Unsigned,
{
    let mut result = T::one();
    while exp > T::zero() {
        if exp & T::one() == T::one() {
            result = result * base;
        }
        exp = exp >> 1;
        if exp > T::zero() {
            base = base * base;
        }
    }
    result
}

/// Computes `(a * b) mod m` without ever forming the full product.
///
/// Shift-and-add with a reduction after every step: each intermediate value
/// stays below `2 * m`, so the result is exact for operand pairs whose
/// plain product would overflow `T`.
///
/// # Panics
///
/// Panics if `m` is zero or if `m > T::MAX / 2` (the doubling step needs
/// one spare bit above the modulus).
///
/// # Examples
///
/// ```rust
/// # use arbor_core::math::modular::mod_mul;
///
/// assert_eq!(mod_mul(123_456_789u64, 987_654_321u64, 1_000_000_007u64), 259_106_859);
/// assert_eq!(mod_mul(u64::MAX / 3, 7u64, 1_000_000_007u64), (u64::MAX as u128 / 3 * 7 % 1_000_000_007) as u64);
/// ```
pub fn mod_mul<T>(mut a: T, mut b: T, m: T) -> T
where
    T: PrimInt + Unsigned,
{
    assert!(m > T::zero(), "mod_mul: modulus must be positive");
    assert!(
        m <= T::max_value() >> 1,
        "mod_mul: modulus must leave one spare bit for doubling"
    );

    let mut result = T::zero();
    a = a % m;
    while b > T::zero() {
        if b & T::one() == T::one() {
            result = (result + a) % m;
        }
        a = (a << 1) % m;
        b = b >> 1;
    }
    result
}

/// Computes `(base ^ exp) mod m` by squaring.
///
/// The accumulator is seeded with `1 % m`, so a modulus of 1 yields 0 for
/// every input. Residue products are formed directly; `(m - 1)²` must fit
/// in `T` (for `u64`, any modulus below `2^32`).
///
/// # Panics
///
/// Panics if `m` is zero.
///
/// # Examples
///
/// ```rust
/// # use arbor_core::math::modular::mod_pow;
///
/// assert_eq!(mod_pow(2u64, 30u64, 1_000_000_007u64), 73_741_817);
/// assert_eq!(mod_pow(10u64, 100u64, 1u64), 0);
/// ```
pub fn mod_pow<T>(mut base: T, mut exp: T, m: T) -> T
where
    T: PrimInt + Unsigned,
{
    assert!(m > T::zero(), "mod_pow: modulus must be positive");

    let mut result = T::one() % m;
    base = base % m;
    while exp > T::zero() {
        if exp & T::one() == T::one() {
            result = (result * base) % m;
        }
        exp = exp >> 1;
        if exp > T::zero() {
            base = (base * base) % m;
        }
    }
    result
}
