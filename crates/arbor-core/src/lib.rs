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

//! # Arbor Core
//!
//! Foundational utilities and number-theoretic primitives shared by the
//! Arbor algorithm crates. This crate consolidates the small, reusable
//! building blocks that the tree-query and sieve crates are built on.
//!
//! ## Modules
//!
//! - `math`: Generic integer number theory: Euclidean GCD (iterative and
//!   recursive), binary ("Russian peasant") multiplication, binary
//!   exponentiation, and the modular variants of both.
//! - `num`: Associated-constant traits for sentinel values (`MinusOne`),
//!   used by sentinel-encoded optionals in downstream crates.
//! - `utils`: Phantom-tagged, strongly typed indices (`TaggedIndex<T>`)
//!   to keep distinct index spaces from mixing.
//!
//! ## Purpose
//!
//! These primitives keep the higher-level crates free of ad hoc per-type
//! numeric code and raw-`usize` indexing bugs, while compiling down to the
//! same machine code the hand-written versions would.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
pub mod utils;
