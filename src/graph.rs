//! Adjacency-list graphs for planarity queries.
//!
//! A [`Graph`] is an ordered sequence of vertices `0..N`, each owning an
//! ordered list of neighbor indices. The planarity pipeline requires the list
//! to be symmetric (if `a` lists `b`, `b` lists `a`); [`Graph::validate`]
//! checks exactly that and nothing else. Neighbor order is significant: the
//! spanning-forest pass always descends into the first unvisited neighbor, so
//! two graphs with the same edge set but different list orders may produce
//! different forests (and the same verdict).

use crate::error::PlanarityError;

/// An undirected graph as a symmetric adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Neighbor lists; `adjacency[v]` holds the neighbors of `v` in order.
    pub adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Wrap an existing adjacency list, preserving neighbor order.
    pub fn new(adjacency: Vec<Vec<usize>>) -> Self {
        Self { adjacency }
    }

    /// Build a graph on `vertex_count` vertices from undirected edge pairs.
    ///
    /// Both directions are inserted, neighbor lists come out sorted and
    /// deduplicated, and self-loops are skipped with a warning.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(u, v) in edges {
            if u == v {
                log::warn!("skipping self-loop edge ({u}, {v})");
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Self { adjacency }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Neighbor slice of vertex `v`, in list order.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Degree of vertex `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Number of undirected edges (half the directed entry count).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Check that every directed entry has its symmetric counterpart and that
    /// no neighbor index points outside the vertex range.
    ///
    /// Pure check; the graph is left untouched. The first offending directed
    /// pair is reported.
    pub fn validate(&self) -> Result<(), PlanarityError> {
        let n = self.vertex_count();
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            for &u in neighbors {
                if u >= n {
                    return Err(PlanarityError::NeighborOutOfRange {
                        vertex: v,
                        neighbor: u,
                        vertex_count: n,
                    });
                }
                if !self.adjacency[u].contains(&v) {
                    return Err(PlanarityError::AsymmetricEdge { from: v, to: u });
                }
            }
        }
        Ok(())
    }

    /// Cyclically relabel every vertex `v` to `(v + amount) mod N`.
    ///
    /// Row `j` of the result is the old row of the vertex now labelled `j`,
    /// with its neighbor entries relabelled the same way. Negative amounts
    /// rotate the other direction. Planarity is invariant under this map.
    pub fn rotate(&self, amount: isize) -> Graph {
        let n = self.vertex_count() as isize;
        if n == 0 {
            return self.clone();
        }
        let adjacency = (0..n)
            .map(|j| {
                let src = (j - amount).rem_euclid(n) as usize;
                self.adjacency[src]
                    .iter()
                    .map(|&x| (x as isize + amount).rem_euclid(n) as usize)
                    .collect()
            })
            .collect();
        Graph { adjacency }
    }
}

impl From<Vec<Vec<usize>>> for Graph {
    fn from(adjacency: Vec<Vec<usize>>) -> Self {
        Graph::new(adjacency)
    }
}
