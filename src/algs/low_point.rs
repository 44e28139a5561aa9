//! Low-point computation over a spanning forest.
//!
//! The low point of a tree edge is the shallowest depth reachable from the
//! subtree it roots through any back edge; an edge whose subtree has no back
//! edge keeps its seed value, the depth of the edge's upper endpoint. The
//! table also carries one entry per back edge (keyed by its ancestor
//! endpoint, holding the ancestor's depth), which the Mermaid dump uses for
//! labels.

use hashbrown::HashMap as FastMap;

use crate::algs::spanning_forest::SpanningForest;

/// Low points of every outgoing edge, keyed by vertex then edge target.
#[derive(Debug, Clone, Default)]
pub struct LowPointTable {
    table: FastMap<usize, FastMap<usize, u32>>,
}

impl LowPointTable {
    /// Low point of the edge `v → target`, if recorded.
    #[inline]
    pub fn get(&self, v: usize, target: usize) -> Option<u32> {
        self.table.get(&v).and_then(|m| m.get(&target)).copied()
    }

    fn insert(&mut self, v: usize, target: usize, depth: u32) {
        self.table.entry(v).or_default().insert(target, depth);
    }

    fn merge_min(&mut self, v: usize, target: usize, depth: u32) {
        if let Some(slot) = self.table.get_mut(&v).and_then(|m| m.get_mut(&target)) {
            *slot = (*slot).min(depth);
        }
    }
}

/// Compute the low-point table of `forest`, rooted at vertex 0.
///
/// Every tree edge is seeded with its upper endpoint's own depth, then a
/// depth-first pass walks each back edge `(v, ancestor)` up the parent chain
/// from `v` to `ancestor`, min-merging the ancestor's depth into every tree
/// edge it passes. Tree-edge low points never increase after seeding.
pub fn compute_low_points(forest: &SpanningForest) -> LowPointTable {
    let mut table = LowPointTable::default();
    for v in forest.vertices() {
        if let Some(node) = forest.node(v) {
            for &child in &node.tree_edges {
                table.insert(v, child, node.depth);
            }
        }
    }
    if forest.contains(0) {
        propagate(forest, 0, &mut table);
    }
    table
}

fn propagate(forest: &SpanningForest, v: usize, table: &mut LowPointTable) {
    let Some(node) = forest.node(v) else {
        return;
    };
    for &ancestor in &node.back_edges {
        let Some(depth) = forest.depth(ancestor) else {
            continue;
        };
        table.insert(v, ancestor, depth);

        // A back edge always returns to an ancestor, so the climb terminates.
        let mut cursor = v;
        while cursor != ancestor {
            let Some(parent) = forest.parent(cursor) else {
                break;
            };
            table.merge_min(parent, cursor, depth);
            cursor = parent;
        }
    }
    for &child in &node.tree_edges {
        propagate(forest, child, table);
    }
}
