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

//! # Arbor Lift
//!
//! **Lowest-common-ancestor queries on static trees via binary lifting.**
//!
//! A tree over `n` nodes is described once as an undirected edge list, then
//! preprocessed in `O(n log n)` into an [`table::AncestorTable`] that
//! answers arbitrary-many LCA queries in `O(log n)` each.
//!
//! ## Architecture
//!
//! The crate separates **construction** from **querying**:
//!
//! * **`index`**: The strongly-typed [`index::NodeIndex`] all public APIs
//!   speak; raw integers never cross the crate boundary.
//! * **`builder`**: [`builder::TreeBuilder`] accumulates edges with bounds
//!   checking and runs the preprocessing pass (iterative depth-first
//!   traversal plus the doubling fill).
//! * **`table`**: [`table::AncestorTable`], the immutable query structure:
//!   a depth array and a flat `n x LOG` ancestor buffer.
//! * **`slot`**: [`slot::AncestorSlot`], a sentinel-encoded optional
//!   ancestor that keeps the table at one machine word per entry.
//! * **`error`**: Range and connectivity errors, reported as values.
//!
//! ## Contract
//!
//! The input is assumed to be a tree: connected and acyclic. Neither
//! property is verified. On a disconnected input only the component
//! containing the preprocessing root receives finite depths and ancestors;
//! queries that cross into an unreached component report
//! [`error::QueryError::Disconnected`]. Forest handling (one preprocessing
//! pass per component with a caller-managed root list) is out of scope.
//!
//! ## Example
//!
//! ```rust
//! use arbor_lift::builder::TreeBuilder;
//! use arbor_lift::index::NodeIndex;
//!
//! //         0
//! //        / \
//! //       1   2
//! //      / \ / \
//! //     3  4 5  6
//! let mut builder = TreeBuilder::new(7);
//! for (u, v) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)] {
//!     builder.add_edge(NodeIndex::new(u), NodeIndex::new(v))?;
//! }
//!
//! let table = builder.preprocess();
//! assert_eq!(table.lca(NodeIndex::new(3), NodeIndex::new(4))?, NodeIndex::new(1));
//! assert_eq!(table.lca(NodeIndex::new(4), NodeIndex::new(6))?, NodeIndex::new(0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod error;
pub mod index;
pub mod slot;
pub mod table;
