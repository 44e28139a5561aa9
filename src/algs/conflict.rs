//! Signed routing constraints between back edges.
//!
//! At every branching vertex of the spanning forest, the outgoing edges split
//! into independent forks: one per tree child, carrying the back edges of
//! that child's subtree which return above the branch vertex, and one
//! singleton per direct back edge. Two forks sharing a branch vertex
//! constrain each other: a back edge of one fork that dives below the other
//! fork's low point must be drawn on the opposite side of the other fork's
//! deep edges, and the deep edges of a single fork are forced onto a common
//! side. The result is a signed graph over back edges whose two-colorability
//! decides planarity.

use std::fmt;

use hashbrown::{HashMap as FastMap, HashSet as FastSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::algs::low_point::LowPointTable;
use crate::algs::spanning_forest::SpanningForest;

/// Identifier of one back edge: the vertex owning it and the ancestor it
/// returns to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BackEdgeId {
    pub vertex: usize,
    pub ancestor: usize,
}

impl fmt::Display for BackEdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.vertex, self.ancestor)
    }
}

/// Routing constraints of one back edge against the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Back edges forced onto the same side as this one.
    pub same: FastSet<BackEdgeId>,
    /// Back edges forced onto the other side.
    pub opposite: FastSet<BackEdgeId>,
}

/// Signed constraint graph over all back edges of a spanning forest.
#[derive(Debug, Clone, Default)]
pub struct ConstraintGraph {
    entries: FastMap<BackEdgeId, Constraints>,
}

impl ConstraintGraph {
    /// Constraints recorded for `id`, if it names a back edge.
    #[inline]
    pub fn constraints(&self, id: BackEdgeId) -> Option<&Constraints> {
        self.entries.get(&id)
    }

    /// All back-edge identifiers, ascending.
    pub fn back_edge_ids(&self) -> Vec<BackEdgeId> {
        let mut out: Vec<BackEdgeId> = self.entries.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Number of back edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the forest had no back edges at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn register(&mut self, id: BackEdgeId) {
        self.entries.entry(id).or_default();
    }

    fn mark_same(&mut self, a: BackEdgeId, b: BackEdgeId) {
        self.entries.entry(a).or_default().same.insert(b);
        self.entries.entry(b).or_default().same.insert(a);
    }

    fn mark_opposite(&mut self, a: BackEdgeId, b: BackEdgeId) {
        self.entries.entry(a).or_default().opposite.insert(b);
        self.entries.entry(b).or_default().opposite.insert(a);
    }

    /// Record one crossing relationship between two forks: every cross pair
    /// is opposite, and each set's members share a side among themselves.
    fn group(&mut self, set1: &[BackEdgeId], set2: &[BackEdgeId]) {
        for &a in set1 {
            for &b in set2 {
                self.mark_opposite(a, b);
            }
        }
        for set in [set1, set2] {
            for (&a, &b) in set.iter().tuple_combinations() {
                self.mark_same(a, b);
            }
        }
    }
}

/// All back edges at or below `v`, the vertex's own first, then each tree
/// child's subtree in order.
pub fn collect_back_edges(forest: &SpanningForest, v: usize) -> Vec<BackEdgeId> {
    let mut out = Vec::new();
    collect_into(forest, v, &mut out);
    out
}

fn collect_into(forest: &SpanningForest, v: usize, out: &mut Vec<BackEdgeId>) {
    let Some(node) = forest.node(v) else {
        return;
    };
    for &ancestor in &node.back_edges {
        out.push(BackEdgeId { vertex: v, ancestor });
    }
    for &child in &node.tree_edges {
        collect_into(forest, child, out);
    }
}

struct Fork {
    low_point: u32,
    edges: Vec<BackEdgeId>,
}

/// Derive the signed constraint graph of `forest`.
///
/// Every back edge gets an entry up front, so edges free of constraints still
/// appear (they can be routed on either side). Constraint insertion is a set
/// union in both directions, so accumulation order never shows in the result.
pub fn build_constraint_graph(
    forest: &SpanningForest,
    low_points: &LowPointTable,
) -> ConstraintGraph {
    let mut out = ConstraintGraph::default();
    for v in forest.vertices() {
        if let Some(node) = forest.node(v) {
            for &ancestor in &node.back_edges {
                out.register(BackEdgeId { vertex: v, ancestor });
            }
        }
    }
    if forest.contains(0) {
        visit(forest, low_points, 0, &mut out);
    }
    out
}

fn visit(
    forest: &SpanningForest,
    low_points: &LowPointTable,
    start: usize,
    out: &mut ConstraintGraph,
) {
    // Collapse chains: a vertex with a single outgoing edge has nothing to
    // compare, so descend through it (or stop if the single exit is a back
    // edge).
    let mut current = start;
    loop {
        let Some(node) = forest.node(current) else {
            return;
        };
        if node.tree_edges.len() + node.back_edges.len() != 1 {
            break;
        }
        if node.tree_edges.len() == 1 {
            current = node.tree_edges[0];
        } else {
            return;
        }
    }

    let Some(node) = forest.node(current) else {
        return;
    };
    let branch_depth = node.depth;

    let mut forks: Vec<Fork> = Vec::new();
    for &child in &node.tree_edges {
        let Some(low_point) = low_points.get(current, child) else {
            continue;
        };
        let edges: Vec<BackEdgeId> = collect_back_edges(forest, child)
            .into_iter()
            .filter(|id| {
                forest
                    .depth(id.ancestor)
                    .is_some_and(|d| d < branch_depth)
            })
            .collect();
        forks.push(Fork { low_point, edges });
    }
    for &ancestor in &node.back_edges {
        let Some(low_point) = forest.depth(ancestor) else {
            continue;
        };
        forks.push(Fork {
            low_point,
            edges: vec![BackEdgeId {
                vertex: current,
                ancestor,
            }],
        });
    }
    forks.retain(|f| !f.edges.is_empty());

    for (i, j) in forks.iter().tuple_combinations() {
        let set1: Vec<BackEdgeId> = i
            .edges
            .iter()
            .copied()
            .filter(|id| forest.depth(id.ancestor).is_some_and(|d| d > j.low_point))
            .collect();
        let set2: Vec<BackEdgeId> = j
            .edges
            .iter()
            .copied()
            .filter(|id| forest.depth(id.ancestor).is_some_and(|d| d > i.low_point))
            .collect();
        out.group(&set1, &set2);
    }

    for &child in &node.tree_edges {
        visit(forest, low_points, child, out);
    }
}
