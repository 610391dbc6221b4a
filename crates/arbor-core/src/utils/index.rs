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

//! # Strongly Typed Indices
//!
//! Phantom-tagged wrappers around `usize`. A `TaggedIndex<T>` carries a tag
//! type `T: IndexTag` that fixes which index space the value belongs to,
//! while compiling down to a transparent `usize`.
//!
//! Tree code juggles node indices alongside table offsets and power levels;
//! giving the node indices their own type turns an accidental swap into a
//! compile error instead of a wrong answer.
//!
//! ## Usage
//!
//! ```rust
//! use arbor_core::utils::index::{IndexTag, TaggedIndex};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! struct NodeTag;
//! impl IndexTag for NodeTag {
//!     const LABEL: &'static str = "NodeIndex";
//! }
//!
//! type NodeIndex = TaggedIndex<NodeTag>;
//! let v = NodeIndex::new(3);
//! assert_eq!(v.get(), 3);
//! assert_eq!(format!("{}", v), "NodeIndex(3)");
//! ```

use std::marker::PhantomData;

/// Labels a typed-index domain for `Debug`/`Display` output.
pub trait IndexTag: Clone {
    /// Human-readable name of the index space, e.g. `"NodeIndex"`.
    const LABEL: &'static str;
}

/// A strongly typed index into the domain tagged by `T`.
///
/// `#[repr(transparent)]` over `usize`: no runtime cost, no accidental
/// mixing between index spaces.
///
/// # Examples
///
/// ```rust
/// # use arbor_core::utils::index::{IndexTag, TaggedIndex};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// struct SlotTag;
/// impl IndexTag for SlotTag {
///     const LABEL: &'static str = "SlotIndex";
/// }
///
/// let index = TaggedIndex::<SlotTag>::new(5);
/// assert_eq!(index.get(), 5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaggedIndex<T> {
    value: usize,
    _tag: PhantomData<T>,
}

impl<T> TaggedIndex<T> {
    /// Wraps a raw `usize` as a typed index.
    #[inline(always)]
    pub const fn new(value: usize) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns the underlying `usize`.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.value
    }
}

impl<T> std::fmt::Debug for TaggedIndex<T>
where
    T: IndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::LABEL, self.value)
    }
}

impl<T> std::fmt::Display for TaggedIndex<T>
where
    T: IndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::LABEL, self.value)
    }
}

impl<T> From<usize> for TaggedIndex<T> {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl<T> From<TaggedIndex<T>> for usize {
    fn from(index: TaggedIndex<T>) -> Self {
        index.value
    }
}

impl<T> std::ops::Add<usize> for TaggedIndex<T> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self::new(self.value + rhs)
    }
}

impl<T> std::ops::Sub<usize> for TaggedIndex<T> {
    type Output = Self;

    fn sub(self, rhs: usize) -> Self::Output {
        Self::new(self.value - rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    struct TestTag;

    impl IndexTag for TestTag {
        const LABEL: &'static str = "TestIdx";
    }

    type TestIndex = TaggedIndex<TestTag>;

    #[test]
    fn test_new_and_get() {
        let idx = TestIndex::new(10);
        assert_eq!(idx.get(), 10);
    }

    #[test]
    fn test_conversions() {
        let idx: TestIndex = 42.into();
        assert_eq!(idx.get(), 42);

        let raw: usize = idx.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_formatting_uses_label() {
        let idx = TestIndex::new(7);
        assert_eq!(format!("{}", idx), "TestIdx(7)");
        assert_eq!(format!("{:?}", idx), "TestIdx(7)");
    }

    #[test]
    fn test_offset_arithmetic() {
        let idx = TestIndex::new(10);
        assert_eq!((idx + 5).get(), 15);
        assert_eq!((idx - 5).get(), 5);
    }

    #[test]
    fn test_ordering() {
        assert!(TestIndex::new(1) < TestIndex::new(2));
    }
}
