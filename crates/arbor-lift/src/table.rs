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

//! The preprocessed lowest-common-ancestor query structure.
//!
//! An [`AncestorTable`] holds, for every node, its depth below the
//! preprocessing root and its `2^k`-th ancestors for `k` in `[0, LOG)`,
//! where `LOG` is the smallest power with `2^LOG > n`. The ancestor table
//! is a single flat buffer in node-major order, so a query's `O(log n)`
//! probes stay cache-friendly.
//!
//! The table is immutable: queries never mutate, so sharing it across
//! readers is safe.

use crate::{
    error::{IndexOutOfRange, QueryError},
    index::NodeIndex,
    slot::AncestorSlot,
};

/// The concrete slot type of the ancestor buffer. `isize` covers every
/// node index a `Vec`-backed tree can hold while leaving the negative
/// range to the absent encoding.
pub(crate) type Slot = AncestorSlot<isize>;

/// Maps a `(node, level)` pair onto the flat ancestor buffer.
#[inline(always)]
pub(crate) fn flatten_index(log: usize, node: usize, level: usize) -> usize {
    node * log + level
}

/// An immutable binary-lifting table answering LCA queries in `O(log n)`.
///
/// Produced by [`crate::builder::TreeBuilder::preprocess`]; there is no
/// other way to obtain one, so every table is preprocessed by
/// construction.
///
/// # Examples
///
/// ```rust
/// use arbor_lift::builder::TreeBuilder;
/// use arbor_lift::index::NodeIndex;
///
/// let mut builder = TreeBuilder::new(5);
/// for (u, v) in [(0, 1), (1, 2), (1, 3), (0, 4)] {
///     builder.add_edge(NodeIndex::new(u), NodeIndex::new(v))?;
/// }
/// let table = builder.preprocess();
///
/// assert_eq!(table.lca(NodeIndex::new(2), NodeIndex::new(3))?, NodeIndex::new(1));
/// assert_eq!(table.lca(NodeIndex::new(2), NodeIndex::new(4))?, NodeIndex::new(0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct AncestorTable {
    /// Height of the doubling table; smallest value with `2^log > len`.
    log: usize,
    /// Depth of each node below the preprocessing root. Unreached nodes
    /// keep depth 0.
    depths: Vec<usize>,
    /// Flat `len × log` buffer of `2^level` ancestors, node-major.
    ancestors: Vec<Slot>,
}

impl AncestorTable {
    pub(crate) fn from_parts(log: usize, depths: Vec<usize>, ancestors: Vec<Slot>) -> Self {
        debug_assert_eq!(ancestors.len(), depths.len() * log);
        Self {
            log,
            depths,
            ancestors,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            log: 0,
            depths: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    /// Returns the number of nodes in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Returns `true` if the table holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Returns the height of the doubling table.
    #[inline]
    pub fn log(&self) -> usize {
        self.log
    }

    /// Returns the depth of `node` below the preprocessing root.
    ///
    /// Nodes the preprocessing pass never reached report depth 0.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline]
    pub fn depth(&self, node: NodeIndex) -> usize {
        self.depths[node.get()]
    }

    /// Returns the immediate parent of `node`, or `None` for the
    /// preprocessing root and for unreached nodes.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    #[inline]
    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.ancestor_at(node, 0)
    }

    /// Returns the `2^level`-th ancestor of `node`, or `None` where the
    /// chain toward the root runs out (including every `level >= log`).
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn ancestor_at(&self, node: NodeIndex, level: usize) -> Option<NodeIndex> {
        assert!(
            node.get() < self.len(),
            "ancestor_at: {} exceeds table length {}",
            node,
            self.len()
        );
        if level >= self.log {
            return None;
        }
        Self::slot_node(self.slot(node, level))
    }

    /// Returns the lowest common ancestor of `u` and `v`.
    ///
    /// Binary lifting: equalize depths, then lift both nodes past every
    /// level where their ancestors differ; the shared parent one step up
    /// is the answer. `O(log n)`.
    ///
    /// `lca(u, u)` is `u`, and `lca(root, v)` is the root, both as plain
    /// consequences of the same control flow.
    ///
    /// # Errors
    ///
    /// - [`QueryError::OutOfRange`] if either operand is not in `[0, len)`.
    /// - [`QueryError::Disconnected`] if the operands share no
    ///   preprocessed ancestor (the input graph was not connected and at
    ///   least one operand sits outside the root's component).
    pub fn lca(&self, u: NodeIndex, v: NodeIndex) -> Result<NodeIndex, QueryError> {
        self.check(u)?;
        self.check(v)?;

        // Keep `deep` the (weakly) deeper operand.
        let (mut deep, mut shallow) = if self.depths[u.get()] < self.depths[v.get()] {
            (v, u)
        } else {
            (u, v)
        };

        // Lift `deep` to `shallow`'s depth. The depth guard means the
        // required ancestor exists on any preprocessed component; an
        // absent slot simply blocks the step.
        let target = self.depths[shallow.get()];
        for level in (0..self.log).rev() {
            if self.depths[deep.get()] >= target + (1usize << level) {
                if let Some(lifted) = Self::slot_node(self.slot(deep, level)) {
                    deep = lifted;
                }
            }
        }

        if deep == shallow {
            return Ok(deep);
        }

        // Lift both past every level where their ancestors differ. Two
        // absent ancestors compare equal, so exhausted chains never lift.
        for level in (0..self.log).rev() {
            let a = self.slot(deep, level);
            let b = self.slot(shallow, level);
            if a != b {
                if let (Some(x), Some(y)) = (Self::slot_node(a), Self::slot_node(b)) {
                    deep = x;
                    shallow = y;
                }
            }
        }

        // The operands now sit just below their common ancestor.
        match Self::slot_node(self.slot(deep, 0)) {
            Some(parent) => Ok(parent),
            None => Err(QueryError::Disconnected { left: u, right: v }),
        }
    }

    /// Returns `true` if `ancestor` lies on `descendant`'s path to the
    /// preprocessing root. Every node is an ancestor of itself.
    ///
    /// # Panics
    ///
    /// Panics if either node is out of range.
    pub fn is_ancestor(&self, ancestor: NodeIndex, descendant: NodeIndex) -> bool {
        let target = self.depth(ancestor);
        if self.depth(descendant) < target {
            return false;
        }

        let mut node = descendant;
        for level in (0..self.log).rev() {
            if self.depths[node.get()] >= target + (1usize << level) {
                if let Some(lifted) = Self::slot_node(self.slot(node, level)) {
                    node = lifted;
                }
            }
        }
        node == ancestor
    }

    /// Returns the number of edges on the path between `u` and `v`.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`AncestorTable::lca`] fails for the same
    /// operands.
    pub fn distance(&self, u: NodeIndex, v: NodeIndex) -> Result<usize, QueryError> {
        let meet = self.lca(u, v)?;
        Ok(self.depths[u.get()] + self.depths[v.get()] - 2 * self.depths[meet.get()])
    }

    fn check(&self, node: NodeIndex) -> Result<(), IndexOutOfRange> {
        if node.get() >= self.len() {
            return Err(IndexOutOfRange {
                index: node.get(),
                len: self.len(),
            });
        }
        Ok(())
    }

    #[inline(always)]
    fn slot(&self, node: NodeIndex, level: usize) -> Slot {
        self.ancestors[flatten_index(self.log, node.get(), level)]
    }

    #[inline(always)]
    fn slot_node(slot: Slot) -> Option<NodeIndex> {
        slot.into_option().map(|raw| NodeIndex::new(raw as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TreeBuilder;
    use rand::{rngs::StdRng, Rng, SeedableRng};

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
    fn example_table() -> AncestorTable {
        let mut builder = TreeBuilder::new(7);
        for (u, v) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)] {
            builder.add_edge(ni(u), ni(v)).unwrap();
        }
        builder.preprocess()
    }

    #[test]
    fn test_example_tree_queries() {
        let table = example_table();
        assert_eq!(table.lca(ni(3), ni(4)).unwrap(), ni(1));
        assert_eq!(table.lca(ni(3), ni(5)).unwrap(), ni(0));
        assert_eq!(table.lca(ni(4), ni(6)).unwrap(), ni(0));
        assert_eq!(table.lca(ni(5), ni(6)).unwrap(), ni(2));
        assert_eq!(table.lca(ni(3), ni(3)).unwrap(), ni(3));
    }

    #[test]
    fn test_query_is_reflexive() {
        let table = example_table();
        for node in 0..table.len() {
            assert_eq!(table.lca(ni(node), ni(node)).unwrap(), ni(node));
        }
    }

    #[test]
    fn test_query_is_symmetric() {
        let table = example_table();
        for u in 0..table.len() {
            for v in 0..table.len() {
                assert_eq!(table.lca(ni(u), ni(v)), table.lca(ni(v), ni(u)));
            }
        }
    }

    #[test]
    fn test_root_is_everyones_ancestor() {
        let table = example_table();
        for node in 0..table.len() {
            assert_eq!(table.lca(ni(0), ni(node)).unwrap(), ni(0));
        }
    }

    #[test]
    fn test_answer_depth_bound_and_parent_chain() {
        let table = example_table();
        for u in 0..table.len() {
            for v in 0..table.len() {
                let meet = table.lca(ni(u), ni(v)).unwrap();
                let bound = table.depth(ni(u)).min(table.depth(ni(v)));
                assert!(table.depth(meet) <= bound);

                // Both operands must reach the answer along parent links.
                for start in [ni(u), ni(v)] {
                    let mut walk = start;
                    while walk != meet {
                        walk = table.parent(walk).expect("chain must pass through the LCA");
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_operand_is_reported() {
        let table = example_table();
        let err = table.lca(ni(1), ni(99)).unwrap_err();
        assert_eq!(
            err,
            QueryError::OutOfRange(IndexOutOfRange { index: 99, len: 7 })
        );
    }

    #[test]
    fn test_empty_table_rejects_every_query() {
        let table = TreeBuilder::new(0).preprocess();
        assert!(table.is_empty());
        assert!(matches!(
            table.lca(ni(0), ni(0)),
            Err(QueryError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_cross_component_query_is_disconnected() {
        let mut builder = TreeBuilder::new(4);
        builder.add_edge(ni(0), ni(1)).unwrap();
        builder.add_edge(ni(2), ni(3)).unwrap();
        let table = builder.preprocess();

        assert_eq!(
            table.lca(ni(1), ni(3)).unwrap_err(),
            QueryError::Disconnected {
                left: ni(1),
                right: ni(3)
            }
        );
        // Nodes 2 and 3 are connected to each other, but their component
        // was never preprocessed; the table cannot answer for them.
        assert!(matches!(
            table.lca(ni(2), ni(3)),
            Err(QueryError::Disconnected { .. })
        ));
        // Queries inside the preprocessed component still work.
        assert_eq!(table.lca(ni(0), ni(1)).unwrap(), ni(0));
    }

    #[test]
    fn test_ancestor_at_follows_powers_of_two() {
        let n = 20;
        let mut builder = TreeBuilder::new(n);
        for i in 1..n {
            builder.add_edge(ni(i - 1), ni(i)).unwrap();
        }
        let table = builder.preprocess();

        assert_eq!(table.ancestor_at(ni(12), 0), Some(ni(11)));
        assert_eq!(table.ancestor_at(ni(12), 2), Some(ni(8)));
        assert_eq!(table.ancestor_at(ni(12), 3), Some(ni(4)));
        // 2^4 = 16 steps from node 12 would pass the root.
        assert_eq!(table.ancestor_at(ni(12), 4), None);
        // Levels at or above the table height are absent by definition.
        assert_eq!(table.ancestor_at(ni(12), table.log()), None);
    }

    #[test]
    fn test_is_ancestor() {
        let table = example_table();
        assert!(table.is_ancestor(ni(0), ni(6)));
        assert!(table.is_ancestor(ni(2), ni(5)));
        assert!(table.is_ancestor(ni(3), ni(3)));
        assert!(!table.is_ancestor(ni(1), ni(5)));
        assert!(!table.is_ancestor(ni(6), ni(2)));
    }

    #[test]
    fn test_distance() {
        let table = example_table();
        assert_eq!(table.distance(ni(3), ni(4)).unwrap(), 2);
        assert_eq!(table.distance(ni(3), ni(6)).unwrap(), 4);
        assert_eq!(table.distance(ni(0), ni(5)).unwrap(), 2);
        assert_eq!(table.distance(ni(4), ni(4)).unwrap(), 0);
    }

    /// Walks parent links one step at a time; the reference the lifting
    /// answers are checked against.
    fn naive_lca(
        parents: &[Option<usize>],
        depths: &[usize],
        mut a: usize,
        mut b: usize,
    ) -> usize {
        while depths[a] > depths[b] {
            a = parents[a].unwrap();
        }
        while depths[b] > depths[a] {
            b = parents[b].unwrap();
        }
        while a != b {
            a = parents[a].unwrap();
            b = parents[b].unwrap();
        }
        a
    }

    #[test]
    fn test_random_trees_match_naive_oracle() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..8 {
            let n = rng.gen_range(2..250);

            // Random tree: each node hangs off an earlier one, so node 0
            // is the root and the graph is connected by construction.
            let mut parents: Vec<Option<usize>> = vec![None; n];
            let mut depths = vec![0usize; n];
            let mut builder = TreeBuilder::new(n);
            for child in 1..n {
                let parent = rng.gen_range(0..child);
                parents[child] = Some(parent);
                depths[child] = depths[parent] + 1;
                builder.add_edge(ni(parent), ni(child)).unwrap();
            }
            let table = builder.preprocess();

            for _ in 0..500 {
                let u = rng.gen_range(0..n);
                let v = rng.gen_range(0..n);
                let expected = naive_lca(&parents, &depths, u, v);
                assert_eq!(
                    table.lca(ni(u), ni(v)).unwrap(),
                    ni(expected),
                    "lca({}, {}) on a {}-node tree",
                    u,
                    v,
                    n
                );
            }
        }
    }
}
