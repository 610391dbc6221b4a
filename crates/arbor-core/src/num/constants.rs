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

/// A trait for signed integer types with a compile-time `-1` constant.
///
/// Sentinel-encoded optionals reserve `-1` to mean "absent"; this trait
/// makes that constant available in generic and `const` positions.
///
/// # Examples
///
/// ```rust
/// # use arbor_core::num::constants::MinusOne;
///
/// fn sentinel<T: MinusOne>() -> T {
///     T::MINUS_ONE
/// }
///
/// assert_eq!(sentinel::<i32>(), -1);
/// ```
pub trait MinusOne {
    /// The value `-1` for the implementing type.
    const MINUS_ONE: Self;
}

macro_rules! impl_minus_one {
    ($($t:ty),*) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }
        )*
    };
}

impl_minus_one!(i8, i16, i32, i64, i128, isize);
