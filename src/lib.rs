//! # planarity
//!
//! planarity is a small Rust library that decides whether
//! an undirected graph can be drawn in the plane without edge crossings. It
//! implements a DFS-based criterion: a spanning forest with tree/back edge
//! classification, low points per tree edge, signed `same`/`opposite`
//! routing constraints between back edges meeting at a branch vertex, and a
//! two-coloring pass over that signed graph. The graph is planar exactly
//! when the coloring is consistent.
//!
//! ## Features
//! - Adjacency-list [`graph::Graph`] with symmetry validation and cyclic
//!   relabelling
//! - The full pipeline behind [`algs::is_planar`], with every stage exposed
//!   for inspection (forest, low points, constraint graph, side assignment)
//! - Readers for a compact bit-packed encoding ([`io::graph6`]) and
//!   DIMACS-style edge lists ([`io::dimacs`])
//! - A batch [`suite`] runner producing a serializable report
//!
//! ## Determinism
//!
//! Every stage is a deterministic traversal: the forest always descends into
//! the first unvisited neighbor in adjacency order, and wherever hash-map
//! iteration could leak into observable output (forest dumps, constraint
//! seeds, side propagation) keys are sorted first. Running a query twice on
//! the same input yields the same verdict and the same intermediate state.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! planarity = "0.1"
//! ```
//!
//! ```rust
//! use planarity::prelude::*;
//!
//! let path = Graph::new(vec![vec![1], vec![0, 2], vec![1]]);
//! assert_eq!(is_planar(&path), Ok(true));
//! ```

pub mod algs;
pub mod error;
pub mod graph;
pub mod io;
pub mod suite;

pub use algs::is_planar;
pub use error::PlanarityError;

/// A convenient prelude to import the most-used types & entry points:
pub mod prelude {
    pub use crate::algs::conflict::{
        BackEdgeId, ConstraintGraph, Constraints, build_constraint_graph, collect_back_edges,
    };
    pub use crate::algs::is_planar;
    pub use crate::algs::low_point::{LowPointTable, compute_low_points};
    pub use crate::algs::resolve::{SideAssignment, resolve_constraints};
    pub use crate::algs::spanning_forest::{
        Retraction, SpanningForest, TreeNode, build_spanning_forest, classify_edges,
    };
    pub use crate::error::PlanarityError;
    pub use crate::graph::Graph;
    pub use crate::io::dimacs::{parse_dimacs, read_dimacs_file};
    pub use crate::io::graph6::{parse_graph6, parse_graph6_str};
    pub use crate::suite::{SuiteFailure, SuiteReport, run_file, run_suite};
}
