//! F-heavy edge filtering for the randomized strategy.
//!
//! An edge `(u, v, w)` is F-heavy with respect to a forest `F` when `u` and
//! `v` are connected in `F` and `w` exceeds the heaviest edge on the
//! `u`-`v` path. By the cycle property such an edge is in no minimum
//! spanning forest. Edges whose endpoints `F` does not connect are kept.

use std::collections::VecDeque;

use super::{DisjointSet, WorkEdge};

/// How the randomized strategy decides whether an edge is F-heavy.
///
/// Both modes only ever discard edges that cannot belong to a minimum
/// spanning forest; they differ in how many such edges they catch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HeavyEdgeFilter {
    /// Compare against the heaviest edge on the forest path between the
    /// endpoints (the textbook test).
    #[default]
    PathMaximum,
    /// Compare against the heaviest edge anywhere in the forest. Cheaper to
    /// set up but keeps more edges for the second recursive call.
    ForestMaximum,
}

/// Splits `candidates` into F-light edges (returned) and a discard count.
pub(crate) fn retain_light(
    filter: HeavyEdgeFilter,
    vertex_count: usize,
    forest: &[WorkEdge],
    candidates: Vec<WorkEdge>,
) -> (Vec<WorkEdge>, usize) {
    let before = candidates.len();
    let light: Vec<WorkEdge> = match filter {
        HeavyEdgeFilter::PathMaximum => {
            let paths = PathMaxima::build(vertex_count, forest);
            candidates
                .into_iter()
                .filter(|edge| !paths.is_heavy(edge))
                .collect()
        }
        HeavyEdgeFilter::ForestMaximum => {
            let mut sets = DisjointSet::new(vertex_count);
            for edge in forest {
                sets.union(edge.source, edge.target);
            }
            let ceiling = forest
                .iter()
                .map(|edge| edge.weight)
                .fold(f64::NEG_INFINITY, f64::max);
            candidates
                .into_iter()
                .filter(|edge| !(sets.same_set(edge.source, edge.target) && edge.weight > ceiling))
                .collect()
        }
    };
    let discarded = before - light.len();
    (light, discarded)
}

/// Binary-lifting tables answering "heaviest edge on the forest path".
pub(crate) struct PathMaxima {
    tree: Vec<usize>,
    depth: Vec<usize>,
    /// `ancestors[k][v]` is the `2^k`-th ancestor of `v` (roots map to
    /// themselves).
    ancestors: Vec<Vec<usize>>,
    /// `maxima[k][v]` is the heaviest edge between `v` and `ancestors[k][v]`.
    maxima: Vec<Vec<f64>>,
}

impl PathMaxima {
    pub(crate) fn build(vertex_count: usize, forest: &[WorkEdge]) -> Self {
        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); vertex_count];
        for edge in forest {
            adjacency[edge.source].push((edge.target, edge.weight));
            adjacency[edge.target].push((edge.source, edge.weight));
        }

        let mut tree = vec![usize::MAX; vertex_count];
        let mut depth = vec![0; vertex_count];
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        let mut parent_weight = vec![f64::NEG_INFINITY; vertex_count];
        let mut queue = VecDeque::new();

        for root in 0..vertex_count {
            if tree[root] != usize::MAX {
                continue;
            }
            tree[root] = root;
            queue.push_back(root);
            while let Some(vertex) = queue.pop_front() {
                for &(neighbour, weight) in &adjacency[vertex] {
                    if tree[neighbour] != usize::MAX {
                        continue;
                    }
                    tree[neighbour] = root;
                    depth[neighbour] = depth[vertex] + 1;
                    parent[neighbour] = vertex;
                    parent_weight[neighbour] = weight;
                    queue.push_back(neighbour);
                }
            }
        }

        let levels = levels_for(vertex_count);
        let mut ancestors = Vec::with_capacity(levels);
        let mut maxima = Vec::with_capacity(levels);
        ancestors.push(parent);
        maxima.push(parent_weight);
        for level in 1..levels {
            let previous_up = &ancestors[level - 1];
            let previous_max = &maxima[level - 1];
            let up: Vec<usize> = (0..vertex_count)
                .map(|vertex| previous_up[previous_up[vertex]])
                .collect();
            let max: Vec<f64> = (0..vertex_count)
                .map(|vertex| previous_max[vertex].max(previous_max[previous_up[vertex]]))
                .collect();
            ancestors.push(up);
            maxima.push(max);
        }

        Self {
            tree,
            depth,
            ancestors,
            maxima,
        }
    }

    /// Heaviest edge on the path between `left` and `right`, or `None` when
    /// the forest does not connect them (or they coincide).
    pub(crate) fn path_maximum(&self, left: usize, right: usize) -> Option<f64> {
        if left == right || self.tree[left] != self.tree[right] {
            return None;
        }

        let (mut deep, mut shallow) = if self.depth[left] >= self.depth[right] {
            (left, right)
        } else {
            (right, left)
        };
        let mut heaviest = f64::NEG_INFINITY;

        let mut gap = self.depth[deep] - self.depth[shallow];
        let mut level = 0;
        while gap > 0 {
            if gap & 1 == 1 {
                heaviest = heaviest.max(self.maxima[level][deep]);
                deep = self.ancestors[level][deep];
            }
            gap >>= 1;
            level += 1;
        }

        if deep == shallow {
            return Some(heaviest);
        }

        for level in (0..self.ancestors.len()).rev() {
            let up_deep = self.ancestors[level][deep];
            let up_shallow = self.ancestors[level][shallow];
            if up_deep != up_shallow {
                heaviest = heaviest
                    .max(self.maxima[level][deep])
                    .max(self.maxima[level][shallow]);
                deep = up_deep;
                shallow = up_shallow;
            }
        }

        Some(heaviest.max(self.maxima[0][deep]).max(self.maxima[0][shallow]))
    }

    fn is_heavy(&self, edge: &WorkEdge) -> bool {
        self.path_maximum(edge.source, edge.target)
            .is_some_and(|heaviest| edge.weight > heaviest)
    }
}

/// Number of lifting levels so that `2^levels > vertex_count`.
fn levels_for(vertex_count: usize) -> usize {
    let bits = usize::BITS - vertex_count.leading_zeros();
    (bits as usize).max(1)
}
