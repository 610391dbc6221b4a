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

//! # Arbor Sieve
//!
//! Prime-sieving utilities over dense bitmaps.
//!
//! - `eratosthenes`: all primes up to a limit, `O(n log log n)`.
//! - `segmented`: all primes inside an arbitrary range `[lo, hi]` without
//!   sieving everything below it; only the base primes up to `sqrt(hi)`
//!   plus one bitmap sized to the range are touched.
//! - `factor`: a smallest-prime-factor table supporting `O(log x)`
//!   factorization of any value it covers.
//!
//! Composite marks live in a `FixedBitSet`, one bit per candidate.

pub mod eratosthenes;
pub mod factor;
pub mod segmented;
