//! Union-find (disjoint set union) over dense vertex indices.
//!
//! The spanning forest builder uses this structure to detect cycles: two
//! vertices whose roots match are already connected, so an edge between them
//! would close a cycle. `find` compresses paths iteratively and `union` merges
//! by rank, keeping both operations near-constant amortised time.

use std::cmp::Ordering;

use crate::error::{KruskalError, Result};

/// Partition of the elements `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.connected(0, 1)?);
/// assert_eq!(sets.set_count(), 3);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `count` singleton sets; each element is its own root with rank
    /// zero.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: vec![0; count],
            sets: count,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets remaining.
    #[must_use]
    #[rustfmt::skip]
    pub const fn set_count(&self) -> usize { self.sets }

    /// Returns the rank recorded for `element`.
    ///
    /// Rank is an upper bound on the height of the tree rooted at `element`
    /// and is only meaningful for roots.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertexIndex`] when `element` is out of
    /// range.
    pub fn rank(&self, element: usize) -> Result<u8> {
        self.check(element)?;
        Ok(self.rank[element])
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every node visited on the way up is re-pointed at the root.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertexIndex`] when `element` is out of
    /// range; the structure is left untouched in that case.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        self.check(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root with the lower rank is attached beneath the other. When ranks
    /// tie, `right`'s root goes under `left`'s root, whose rank grows by one.
    /// Returns `false` without changes when both already share a root.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertexIndex`] when either element is out
    /// of range. Both indices are checked before any path is compressed.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;

        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = match left_rank.cmp(&right_rank) {
            Ordering::Less => (right_root, left_root),
            Ordering::Greater | Ordering::Equal => (left_root, right_root),
        };

        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.sets = self.sets.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidVertexIndex`] when either element is out
    /// of range.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, element: usize) -> Result<()> {
        let count = self.parent.len();
        if element < count {
            Ok(())
        } else {
            Err(KruskalError::InvalidVertexIndex {
                index: element,
                count,
            })
        }
    }

    #[cfg(test)]
    fn parent_of(&self, element: usize) -> usize {
        self.parent[element]
    }
}
