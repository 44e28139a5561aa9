//! `PlanarityError`: unified error type for planarity public APIs
//!
//! This error type is used throughout the crate to provide robust,
//! non-panicking error handling for all public APIs. Everything that can go
//! wrong goes wrong at the input boundary: either the adjacency list handed
//! to the tester is malformed, or an encoded graph cannot be decoded. The
//! pipeline itself never fails once its input has validated.

use thiserror::Error;

/// Unified error type for planarity operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanarityError {
    /// The adjacency list is not symmetric: `from` lists `to`, but `to` does
    /// not list `from`.
    #[error("invalid graph: edge {from}->{to} exists, but {to}->{from} does not")]
    AsymmetricEdge { from: usize, to: usize },
    /// A neighbor index points past the end of the vertex list.
    #[error("invalid graph: vertex {vertex} lists neighbor {neighbor}, but the graph has {vertex_count} vertices")]
    NeighborOutOfRange {
        vertex: usize,
        neighbor: usize,
        vertex_count: usize,
    },
    /// An encoded graph was empty where at least a count byte was expected.
    #[error("encoded graph is empty")]
    EmptyEncoding,
    /// An encoded graph ended before the declared structure was complete.
    #[error("truncated encoding: needed {needed} bytes, got {got}")]
    TruncatedEncoding { needed: usize, got: usize },
    /// A count byte (marker or continuation) is outside every recognized form.
    #[error("invalid count byte {0}")]
    InvalidCountByte(u8),
    /// An edge-list input declared no `p edge N M` header before its edges.
    #[error("no problem header found (expected `p edge N M`)")]
    MissingHeader,
    /// An edge-list header line could not be parsed.
    #[error("invalid problem header at line {line}: `{content}`")]
    InvalidHeader { line: usize, content: String },
    /// An edge line could not be parsed.
    #[error("invalid edge at line {line}: `{content}`")]
    InvalidEdgeLine { line: usize, content: String },
    /// An edge line names a vertex outside the declared range.
    #[error("vertex {vertex} at line {line} out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// An underlying I/O failure, carried as its message so the error type
    /// stays `Clone + Eq`.
    #[error("i/o error: {0}")]
    Io(String),
}
