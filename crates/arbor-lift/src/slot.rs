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

use arbor_core::num::constants::MinusOne;
use num_traits::Signed;

/// An ancestor-table entry that may be absent.
///
/// The ancestor table stores `n × LOG` entries, and a large share of them
/// are "no such ancestor" (every entry above a node's own depth). Instead
/// of `Option<T>`, this type uses a sentinel encoding so each entry stays a
/// single machine word: the table is read on every query step, and cache
/// behavior dominates query cost.
///
/// Encoding:
/// - Non-negative values are node indices.
/// - Negative values (`<= -1`) mean absent.
///
/// The sentinel never leaves this type: conversions to and from
/// `Option<T>` happen at the API edge.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AncestorSlot<T>(T)
where
    T: Signed;

impl<T> AncestorSlot<T>
where
    T: Copy + Signed + PartialOrd + MinusOne,
{
    const ABSENT: T = T::MINUS_ONE;

    /// Creates a slot from an `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arbor_lift::slot::AncestorSlot;
    ///
    /// let slot = AncestorSlot::from_option(Some(5isize));
    /// assert!(slot.is_some());
    /// assert_eq!(slot.into_option(), Some(5));
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => AncestorSlot(v),
            None => AncestorSlot(Self::ABSENT),
        }
    }

    /// Creates a slot holding the given node value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative; negative values are reserved for
    /// the absent encoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arbor_lift::slot::AncestorSlot;
    ///
    /// let slot = AncestorSlot::occupied(3isize);
    /// assert_eq!(slot.into_option(), Some(3));
    /// ```
    pub fn occupied(value: T) -> Self
    where
        T: std::fmt::Display,
    {
        assert!(
            value > Self::ABSENT,
            "called `AncestorSlot::occupied` with a negative value: {}",
            value
        );
        AncestorSlot(value)
    }

    /// Creates an absent slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arbor_lift::slot::AncestorSlot;
    ///
    /// let slot: AncestorSlot<isize> = AncestorSlot::absent();
    /// assert!(slot.is_none());
    /// ```
    #[inline]
    pub fn absent() -> Self {
        AncestorSlot(Self::ABSENT)
    }

    /// Returns `true` if the slot holds no ancestor.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0 <= Self::ABSENT
    }

    /// Returns `true` if the slot holds an ancestor.
    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts the slot back into an `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arbor_lift::slot::AncestorSlot;
    ///
    /// assert_eq!(AncestorSlot::occupied(4isize).into_option(), Some(4));
    /// assert_eq!(AncestorSlot::<isize>::absent().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        if self.is_none() { None } else { Some(self.0) }
    }
}

impl<T> std::fmt::Debug for AncestorSlot<T>
where
    T: Copy + Signed + PartialOrd + MinusOne + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.into_option() {
            Some(v) => write!(f, "AncestorSlot({:?})", v),
            None => write!(f, "AncestorSlot(absent)"),
        }
    }
}
