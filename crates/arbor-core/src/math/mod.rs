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

//! # Math Primitives
//!
//! Generic integer number theory for the Arbor crates. All functions are
//! pure, allocation-free, and generic over the unsigned primitive integers
//! via `num_traits`.
//!
//! ## Submodules
//!
//! - `euclid`: Greatest common divisor, as the classic iterative
//!   remainder-swap loop and as the equivalent recursive formulation.
//! - `modular`: Binary ("Russian peasant") multiplication and binary
//!   exponentiation, plus the modular variants that keep every
//!   intermediate value reduced.
//!
//! ## Motivation
//!
//! The sieve and tree crates only need a handful of number-theoretic
//! operations, but they need them for more than one integer width. Writing
//! them once against `PrimInt + Unsigned` keeps call sites monomorphic and
//! the implementations testable in isolation.

pub mod euclid;
pub mod modular;
