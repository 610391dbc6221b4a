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

//! Error types for tree construction and LCA queries.
//!
//! All failures are reported as values. A rejected operation is a safe
//! no-op: an out-of-range `add_edge` leaves the adjacency structure
//! untouched, and a failed query leaves the table unchanged (queries never
//! mutate anyway).

use crate::index::NodeIndex;

/// A node index outside the valid range `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The offending raw index.
    pub index: usize,
    /// The number of nodes the structure was sized for.
    pub len: usize,
}

impl std::fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "node index {} is out of range for a tree of {} nodes",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

/// The error type for LCA queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// A query operand lies outside `[0, len)`.
    OutOfRange(IndexOutOfRange),
    /// The operands share no preprocessed ancestor: at least one of them
    /// was not reached from the preprocessing root.
    Disconnected {
        /// The first query operand.
        left: NodeIndex,
        /// The second query operand.
        right: NodeIndex,
    },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(e) => write!(f, "invalid query operand: {}", e),
            Self::Disconnected { left, right } => write!(
                f,
                "nodes {} and {} share no preprocessed ancestor",
                left, right
            ),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<IndexOutOfRange> for QueryError {
    fn from(e: IndexOutOfRange) -> Self {
        Self::OutOfRange(e)
    }
}
