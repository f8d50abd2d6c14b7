//! Sequential union-find used by every MST strategy.
//!
//! `find` compresses paths in place and `union` links by rank. When ranks tie
//! the second root is attached under the first, so the representative chosen
//! for a merge depends only on the call order.

use crate::error::DisjointSetError;

/// Disjoint-set forest over the elements `0..len`.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.find(1), sets.find(0));
/// assert_eq!(sets.component_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            ranks: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the number of disjoint sets currently held.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `element`'s set.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`; use [`DisjointSet::try_find`] for
    /// a checked query.
    pub fn find(&mut self, element: usize) -> usize {
        match self.try_find(element) {
            Ok(root) => root,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the representative of `element`'s set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when `element >= self.len()`.
    pub fn try_find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check(element)?;

        let mut root = element;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = element;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `true` if a merge happened and `false` if both elements were
    /// already in the same set.
    ///
    /// # Panics
    /// Panics when either element is out of bounds; use
    /// [`DisjointSet::try_union`] for a checked merge.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        match self.try_union(left, right) {
            Ok(merged) => merged,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked variant of [`DisjointSet::union`].
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfBounds`] when either element is out of
    /// bounds. No merge happens in that case.
    pub fn try_union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(right)?;
        let left_root = self.try_find(left)?;
        let right_root = self.try_find(right)?;

        if left_root == right_root {
            return Ok(false);
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.ranks[left_root],
            self.ranks[right_root],
        );
        self.parents[child] = parent;
        if self.ranks[parent] == self.ranks[child] {
            self.ranks[parent] += 1;
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when both elements share a representative.
    ///
    /// # Panics
    /// Panics when either element is out of bounds.
    pub fn same_set(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    fn check(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parents.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfBounds {
                index: element,
                len: self.parents.len(),
            })
        }
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u32,
    right_rank: u32,
) -> (usize, usize) {
    if right_rank > left_rank {
        (right_root, left_root)
    } else {
        (left_root, right_root)
    }
}
