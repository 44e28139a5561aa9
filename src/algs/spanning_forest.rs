//! Spanning-forest construction with tree/back edge classification.
//!
//! A single iterative depth-first pass from vertex 0 builds one [`TreeNode`]
//! per reachable vertex. Edges to unvisited vertices are recorded as tree
//! edges, edges to visited non-parent vertices as back edges. Because branch
//! vertices are revisited later through an explicit stack, a vertex can
//! optimistically record a neighbor as a tree child before that neighbor is
//! reached along an earlier path; the pass therefore also emits a
//! [`Retraction`] for every discovered back edge, and the retraction log is
//! applied to the provisional forest once the traversal has finished. The
//! traversal itself never reads recorded tree edges, so deferred application
//! is equivalent to correcting in place.

use hashbrown::HashMap as FastMap;

use crate::algs::low_point::LowPointTable;
use crate::graph::Graph;

/// Per-vertex record of the spanning forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Parent vertex, `None` for the root.
    pub parent: Option<usize>,
    /// Child vertices reached through tree edges, in adjacency order.
    /// Provisional until the retraction log has been applied.
    pub tree_edges: Vec<usize>,
    /// Ancestor vertices reached through back edges, in adjacency order.
    pub back_edges: Vec<usize>,
    /// Distance from the root along tree edges.
    pub depth: u32,
}

/// Demotion of one provisionally recorded tree edge.
///
/// Emitted when `child` turns out to be reachable from `target` only through
/// a back edge: `child` must be deleted from `target`'s tree-edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retraction {
    /// Vertex whose tree-edge list holds the stale entry.
    pub target: usize,
    /// The entry to delete.
    pub child: usize,
}

/// Spanning forest over the vertices reachable from vertex 0.
#[derive(Debug, Clone, Default)]
pub struct SpanningForest {
    nodes: FastMap<usize, TreeNode>,
}

impl SpanningForest {
    /// Record of vertex `v`, if it was reached.
    #[inline]
    pub fn node(&self, v: usize) -> Option<&TreeNode> {
        self.nodes.get(&v)
    }

    /// Depth of vertex `v`, if it was reached.
    #[inline]
    pub fn depth(&self, v: usize) -> Option<u32> {
        self.nodes.get(&v).map(|n| n.depth)
    }

    /// Parent of vertex `v`, if it was reached and is not the root.
    #[inline]
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.nodes.get(&v).and_then(|n| n.parent)
    }

    /// Whether vertex `v` was reached.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.nodes.contains_key(&v)
    }

    /// Number of reached vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no vertex was reached (empty input graph).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reached vertices in ascending order.
    pub fn vertices(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.nodes.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Apply a retraction log, deleting each stale tree-edge entry.
    pub fn apply_retractions(&mut self, retractions: &[Retraction]) {
        for r in retractions {
            if let Some(node) = self.nodes.get_mut(&r.target) {
                node.tree_edges.retain(|&c| c != r.child);
            }
        }
    }

    /// Render the forest as a Mermaid flowchart body: solid arrows for tree
    /// edges, dotted arrows for back edges, low-point labels when a table is
    /// supplied. Diagnostic aid; output is deterministic.
    pub fn to_mermaid(&self, low_points: Option<&LowPointTable>) -> String {
        let mut out = String::new();
        for v in self.vertices() {
            let node = &self.nodes[&v];
            out.push_str(&format!("\t{v}[\"{v}\\ndepth={}\"]\n", node.depth));
            for &child in &node.tree_edges {
                match low_points.and_then(|lp| lp.get(v, child)) {
                    Some(label) => out.push_str(&format!("\t{v} --\"{label}\"--> {child}\n")),
                    None => out.push_str(&format!("\t{v} --> {child}\n")),
                }
            }
            for &ancestor in &node.back_edges {
                match low_points.and_then(|lp| lp.get(v, ancestor)) {
                    Some(label) => out.push_str(&format!("\t{v} -.\"{label}\".-> {ancestor}\n")),
                    None => out.push_str(&format!("\t{v} -.-> {ancestor}\n")),
                }
            }
        }
        out
    }
}

/// Build the corrected spanning forest of `graph`, rooted at vertex 0.
///
/// Classifies edges in one pass and then applies the retraction log. Vertices
/// unreachable from 0 are absent from the result.
pub fn build_spanning_forest(graph: &Graph) -> SpanningForest {
    let (mut forest, retractions) = classify_edges(graph);
    forest.apply_retractions(&retractions);
    forest
}

/// One depth-first pass over `graph` from vertex 0.
///
/// Returns the provisional forest (tree-edge lists may still hold entries
/// later discovered to be back edges) together with the ordered retraction
/// log that corrects it.
///
/// The traversal keeps a working copy of the adjacency list and an explicit
/// stack of deferred branch vertices. At each step the current vertex's
/// remaining edges split into tree candidates (unvisited) and back-edge
/// candidates (visited, excluding the immediate parent); the pass always
/// descends into the first tree candidate in adjacency order, consuming that
/// edge from the current vertex's working list, and falls back to the most
/// recently deferred branch vertex when no candidate is left.
pub fn classify_edges(graph: &Graph) -> (SpanningForest, Vec<Retraction>) {
    let mut forest = SpanningForest::default();
    let mut retractions = Vec::new();
    if graph.vertex_count() == 0 {
        return (forest, retractions);
    }

    let mut work: Vec<Vec<usize>> = graph.adjacency.clone();
    let mut branch_stack: Vec<usize> = Vec::new();
    let mut current = 0usize;
    let mut parent: Option<usize> = None;
    let mut depth = 0u32;

    loop {
        let tree_candidates: Vec<usize> = work[current]
            .iter()
            .copied()
            .filter(|i| !forest.nodes.contains_key(i))
            .collect();
        let back_candidates: Vec<usize> = work[current]
            .iter()
            .copied()
            .filter(|&i| forest.nodes.contains_key(&i) && Some(i) != parent)
            .collect();

        for &target in &back_candidates {
            retractions.push(Retraction {
                target,
                child: current,
            });
        }

        if !forest.nodes.contains_key(&current) {
            forest.nodes.insert(
                current,
                TreeNode {
                    parent,
                    tree_edges: tree_candidates.clone(),
                    back_edges: back_candidates,
                    depth,
                },
            );
        }

        if tree_candidates.is_empty() {
            match branch_stack.pop() {
                None => break,
                Some(branch) => {
                    let node = &forest.nodes[&branch];
                    parent = node.parent;
                    depth = node.depth;
                    current = branch;
                }
            }
        } else {
            if tree_candidates.len() > 1 {
                branch_stack.push(current);
            }
            let next = tree_candidates[0];
            work[current].retain(|&j| j != next);
            parent = Some(current);
            current = next;
            depth += 1;
        }
    }

    (forest, retractions)
}
