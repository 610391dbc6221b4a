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

//! Edge accumulation and preprocessing for the LCA engine.
//!
//! A [`TreeBuilder`] is sized for a fixed node count at construction and
//! collects undirected edges with bounds checking. Preprocessing walks the
//! tree once from a root (depth-first, explicit stack), then runs the
//! doubling fill, and hands the result over as an immutable
//! [`AncestorTable`].
//!
//! Preprocessing borrows the builder, so it can be repeated: each call
//! recomputes from scratch, and edges added after a call are simply not
//! visible in tables produced before it.

use crate::{
    error::IndexOutOfRange,
    index::NodeIndex,
    slot::AncestorSlot,
    table::{flatten_index, AncestorTable, Slot},
};
use smallvec::SmallVec;

/// Per-node neighbor storage. Most tree nodes have small degree, so the
/// first four neighbors live inline.
type NeighborList = SmallVec<[NodeIndex; 4]>;

/// Computes the doubling-table height for `num_nodes`: the smallest `log`
/// with `2^log > num_nodes`, so no query ever needs a higher power.
fn table_log(num_nodes: usize) -> usize {
    let mut log = 0;
    while (1usize << log) <= num_nodes {
        log += 1;
    }
    log
}

/// An edge-list accumulator for a tree over a fixed set of nodes.
///
/// The builder assumes, but does not verify, that the accumulated edges
/// form a tree. Duplicate edges and self-loops are accepted as given;
/// cycle and connectivity checking are the caller's responsibility.
///
/// # Examples
///
/// ```rust
/// use arbor_lift::builder::TreeBuilder;
/// use arbor_lift::index::NodeIndex;
///
/// let mut builder = TreeBuilder::new(3);
/// builder.add_edge(NodeIndex::new(0), NodeIndex::new(1))?;
/// builder.add_edge(NodeIndex::new(0), NodeIndex::new(2))?;
///
/// let table = builder.preprocess();
/// assert_eq!(table.depth(NodeIndex::new(2)), 1);
/// # Ok::<(), arbor_lift::error::IndexOutOfRange>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    neighbors: Vec<NeighborList>,
}

impl TreeBuilder {
    /// Creates a builder for a tree over `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            neighbors: vec![NeighborList::new(); num_nodes],
        }
    }

    /// Returns the number of nodes the builder was sized for.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if the builder holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Returns the recorded neighbors of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn neighbors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.neighbors[node.get()]
    }

    /// Records the undirected edge `{u, v}`.
    ///
    /// Either endpoint out of range rejects the edge and leaves the
    /// adjacency structure untouched. Repeated and self-loop edges are
    /// recorded as given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arbor_lift::builder::TreeBuilder;
    /// # use arbor_lift::index::NodeIndex;
    ///
    /// let mut builder = TreeBuilder::new(2);
    /// assert!(builder.add_edge(NodeIndex::new(0), NodeIndex::new(1)).is_ok());
    /// assert!(builder.add_edge(NodeIndex::new(0), NodeIndex::new(9)).is_err());
    /// ```
    pub fn add_edge(&mut self, u: NodeIndex, v: NodeIndex) -> Result<(), IndexOutOfRange> {
        self.check(u)?;
        self.check(v)?;
        self.neighbors[u.get()].push(v);
        self.neighbors[v.get()].push(u);
        Ok(())
    }

    /// Preprocesses the tree from node 0.
    ///
    /// Equivalent to [`TreeBuilder::preprocess_from`] with root 0; an
    /// empty builder yields an empty (but valid) table.
    pub fn preprocess(&self) -> AncestorTable {
        if self.is_empty() {
            return AncestorTable::empty();
        }
        self.run(NodeIndex::new(0))
    }

    /// Preprocesses the tree from the given root.
    ///
    /// Computes every node's depth and immediate parent with a single
    /// depth-first traversal, then fills the doubling table level by
    /// level. `O(n log n)`.
    ///
    /// On a disconnected input only the root's component is reached;
    /// every other node keeps depth 0 and absent ancestors.
    pub fn preprocess_from(&self, root: NodeIndex) -> Result<AncestorTable, IndexOutOfRange> {
        self.check(root)?;
        Ok(self.run(root))
    }

    fn check(&self, node: NodeIndex) -> Result<(), IndexOutOfRange> {
        if node.get() >= self.neighbors.len() {
            return Err(IndexOutOfRange {
                index: node.get(),
                len: self.neighbors.len(),
            });
        }
        Ok(())
    }

    /// The preprocessing pass proper. `root` must be in range.
    fn run(&self, root: NodeIndex) -> AncestorTable {
        let num_nodes = self.len();
        let log = table_log(num_nodes);
        let mut depths = vec![0usize; num_nodes];
        let mut ancestors: Vec<Slot> = vec![AncestorSlot::absent(); num_nodes * log];

        // Depth-first traversal with an explicit stack; recursion depth
        // would otherwise track tree height. Neighbors are pushed in
        // reverse so nodes come off the stack in recursive preorder.
        let mut stack: Vec<(NodeIndex, Option<NodeIndex>)> = Vec::with_capacity(num_nodes);
        stack.push((root, None));
        while let Some((node, parent)) = stack.pop() {
            ancestors[flatten_index(log, node.get(), 0)] =
                AncestorSlot::from_option(parent.map(|p| p.get() as isize));
            for &next in self.neighbors[node.get()].iter().rev() {
                if Some(next) == parent {
                    continue;
                }
                depths[next.get()] = depths[node.get()] + 1;
                stack.push((next, Some(node)));
            }
        }

        // Doubling fill: the 2^k ancestor is the 2^(k-1) ancestor's
        // 2^(k-1) ancestor, absent wherever the chain runs out.
        for level in 1..log {
            for node in 0..num_nodes {
                let half = ancestors[flatten_index(log, node, level - 1)];
                ancestors[flatten_index(log, node, level)] = match half.into_option() {
                    Some(mid) => ancestors[flatten_index(log, mid as usize, level - 1)],
                    None => AncestorSlot::absent(),
                };
            }
        }

        AncestorTable::from_parts(log, depths, ancestors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ni(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    /// The 7-node example tree:
    ///
    /// ```text
    ///         0
    ///        / \
    ///       1   2
    ///      / \ / \
    ///     3  4 5  6
    /// ```
    fn example_builder() -> TreeBuilder {
        let mut builder = TreeBuilder::new(7);
        for (u, v) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)] {
            builder.add_edge(ni(u), ni(v)).unwrap();
        }
        builder
    }

    #[test]
    fn test_table_log_is_smallest_power_above() {
        assert_eq!(table_log(0), 0);
        assert_eq!(table_log(1), 1);
        assert_eq!(table_log(2), 2);
        assert_eq!(table_log(7), 3);
        assert_eq!(table_log(8), 4);
        assert_eq!(table_log(1000), 10);
    }

    #[test]
    fn test_add_edge_is_undirected() {
        let mut builder = TreeBuilder::new(2);
        builder.add_edge(ni(0), ni(1)).unwrap();
        assert_eq!(builder.neighbors(ni(0)), &[ni(1)]);
        assert_eq!(builder.neighbors(ni(1)), &[ni(0)]);
    }

    #[test]
    fn test_add_edge_out_of_range_is_a_no_op() {
        let mut builder = TreeBuilder::new(3);
        builder.add_edge(ni(0), ni(1)).unwrap();

        let err = builder.add_edge(ni(0), ni(7)).unwrap_err();
        assert_eq!(err, IndexOutOfRange { index: 7, len: 3 });
        let err = builder.add_edge(ni(9), ni(1)).unwrap_err();
        assert_eq!(err, IndexOutOfRange { index: 9, len: 3 });

        // The rejected edges must not have touched either endpoint's list.
        assert_eq!(builder.neighbors(ni(0)), &[ni(1)]);
        assert_eq!(builder.neighbors(ni(1)), &[ni(0)]);
        assert_eq!(builder.neighbors(ni(2)), &[] as &[NodeIndex]);
    }

    #[test]
    fn test_duplicate_edges_are_recorded_as_given() {
        let mut builder = TreeBuilder::new(2);
        builder.add_edge(ni(0), ni(1)).unwrap();
        builder.add_edge(ni(0), ni(1)).unwrap();
        assert_eq!(builder.neighbors(ni(0)), &[ni(1), ni(1)]);
    }

    #[test]
    fn test_preprocess_empty_builder_succeeds() {
        let table = TreeBuilder::new(0).preprocess();
        assert!(table.is_empty());
    }

    #[test]
    fn test_preprocess_from_rejects_bad_root() {
        let builder = TreeBuilder::new(2);
        let err = builder.preprocess_from(ni(5)).unwrap_err();
        assert_eq!(err, IndexOutOfRange { index: 5, len: 2 });
    }

    #[test]
    fn test_depths_and_parents_of_example_tree() {
        let table = example_builder().preprocess();

        let expected_depths = [0, 1, 1, 2, 2, 2, 2];
        for (node, &depth) in expected_depths.iter().enumerate() {
            assert_eq!(table.depth(ni(node)), depth, "depth of node {}", node);
        }

        assert_eq!(table.parent(ni(0)), None);
        assert_eq!(table.parent(ni(3)), Some(ni(1)));
        assert_eq!(table.parent(ni(4)), Some(ni(1)));
        assert_eq!(table.parent(ni(5)), Some(ni(2)));
        assert_eq!(table.parent(ni(6)), Some(ni(2)));
    }

    #[test]
    fn test_preprocess_from_other_root_reorients_tree() {
        let table = example_builder().preprocess_from(ni(1)).unwrap();
        assert_eq!(table.depth(ni(1)), 0);
        assert_eq!(table.parent(ni(1)), None);
        assert_eq!(table.parent(ni(0)), Some(ni(1)));
        assert_eq!(table.depth(ni(6)), 3);
    }

    #[test]
    fn test_single_node_tree() {
        let table = TreeBuilder::new(1).preprocess();
        assert_eq!(table.len(), 1);
        assert_eq!(table.depth(ni(0)), 0);
        assert_eq!(table.parent(ni(0)), None);
    }

    #[test]
    fn test_deep_path_does_not_overflow_the_stack() {
        // A 200k-node path would blow a recursive traversal; the explicit
        // stack handles it.
        let n = 200_000;
        let mut builder = TreeBuilder::new(n);
        for i in 1..n {
            builder.add_edge(ni(i - 1), ni(i)).unwrap();
        }
        let table = builder.preprocess();
        assert_eq!(table.depth(ni(n - 1)), n - 1);
    }

    #[test]
    fn test_edges_added_after_preprocess_need_a_new_pass() {
        let mut builder = TreeBuilder::new(3);
        builder.add_edge(ni(0), ni(1)).unwrap();

        let stale = builder.preprocess();
        builder.add_edge(ni(1), ni(2)).unwrap();

        // The old table still answers from its own snapshot.
        assert_eq!(stale.depth(ni(2)), 0);
        assert_eq!(stale.parent(ni(2)), None);

        // A fresh pass observes the new edge.
        let fresh = builder.preprocess();
        assert_eq!(fresh.depth(ni(2)), 2);
        assert_eq!(fresh.parent(ni(2)), Some(ni(1)));
    }

    #[test]
    fn test_unreached_component_keeps_defaults() {
        let mut builder = TreeBuilder::new(4);
        builder.add_edge(ni(0), ni(1)).unwrap();
        builder.add_edge(ni(2), ni(3)).unwrap();

        let table = builder.preprocess();
        assert_eq!(table.depth(ni(1)), 1);
        assert_eq!(table.depth(ni(2)), 0);
        assert_eq!(table.parent(ni(2)), None);
        assert_eq!(table.parent(ni(3)), None);
    }
}
