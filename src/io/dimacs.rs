//! Reader for plain-text edge lists in the DIMACS style.
//!
//! Format: `c ...` comment lines are skipped; a `p edge N M` header declares
//! the vertex and edge counts and must precede every edge; each `e U V` line
//! names one undirected edge by 0-based endpoint indices. Unknown line kinds
//! are ignored. Duplicate edges collapse, self-loops are dropped with a
//! warning, and a declared edge count that disagrees with the deduplicated
//! result is logged, not fatal.
//!
//! After parsing, the graph is normalized for the planarity pipeline, which
//! roots its traversal at vertex 0: while vertex 0 is isolated (and the
//! graph has any edge at all), every label shifts down by one and the
//! trailing, now-empty vertex is dropped.

use std::path::Path;

use crate::error::PlanarityError;
use crate::graph::Graph;

/// Parse an edge-list document into a normalized graph.
pub fn parse_dimacs(text: &str) -> Result<Graph, PlanarityError> {
    let mut vertex_count: Option<usize> = None;
    let mut declared_edges = 0usize;
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line_no = idx + 1;
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "p" => {
                let header = || PlanarityError::InvalidHeader {
                    line: line_no,
                    content: line.to_string(),
                };
                if parts.len() < 4 || parts[1] != "edge" {
                    return Err(header());
                }
                vertex_count = Some(parts[2].parse().map_err(|_| header())?);
                declared_edges = parts[3].parse().map_err(|_| header())?;
            }
            "e" => {
                let Some(n) = vertex_count else {
                    return Err(PlanarityError::MissingHeader);
                };
                let invalid = || PlanarityError::InvalidEdgeLine {
                    line: line_no,
                    content: line.to_string(),
                };
                if parts.len() < 3 {
                    return Err(invalid());
                }
                let u: usize = parts[1].parse().map_err(|_| invalid())?;
                let v: usize = parts[2].parse().map_err(|_| invalid())?;
                for vertex in [u, v] {
                    if vertex >= n {
                        return Err(PlanarityError::VertexOutOfRange {
                            line: line_no,
                            vertex,
                            vertex_count: n,
                        });
                    }
                }
                edges.push((u, v));
            }
            _ => log::debug!("ignoring line {line_no}: `{line}`"),
        }
    }

    let Some(n) = vertex_count else {
        return Err(PlanarityError::MissingHeader);
    };
    let graph = Graph::from_edges(n, &edges);
    if graph.edge_count() != declared_edges {
        log::warn!(
            "edge list declared {declared_edges} edges but {} remain after deduplication",
            graph.edge_count()
        );
    }
    Ok(normalize_root(graph))
}

/// Read and parse an edge-list file.
pub fn read_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Graph, PlanarityError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| PlanarityError::Io(format!("failed to read {}: {e}", path.display())))?;
    parse_dimacs(&text)
}

/// Shift labels down until vertex 0 has an incident edge, dropping the empty
/// trailing vertex each step. An edgeless graph is returned unchanged.
fn normalize_root(mut graph: Graph) -> Graph {
    if graph.edge_count() == 0 {
        return graph;
    }
    while graph.degree(0) == 0 {
        graph = graph.rotate(-1);
        graph.adjacency.pop();
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_triangle() {
        let text = "c triangle\np edge 3 3\ne 0 1\ne 1 2\ne 0 2\n";
        let g = parse_dimacs(text).unwrap();
        assert_eq!(g.adjacency, vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
    }

    #[test]
    fn comments_and_unknown_lines_are_skipped() {
        let text = "c heading\np edge 2 1\nx whatever\ne 0 1\nc trailing\n";
        let g = parse_dimacs(text).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let text = "p edge 2 3\ne 0 1\ne 0 1\ne 1 0\n";
        let g = parse_dimacs(text).unwrap();
        assert_eq!(g.adjacency, vec![vec![1], vec![0]]);
    }

    #[test]
    fn edge_before_header_is_rejected() {
        assert_eq!(
            parse_dimacs("e 0 1\n"),
            Err(PlanarityError::MissingHeader)
        );
    }

    #[test]
    fn malformed_header_is_rejected() {
        assert_eq!(
            parse_dimacs("p edge 3\n"),
            Err(PlanarityError::InvalidHeader {
                line: 1,
                content: "p edge 3".into(),
            })
        );
    }

    #[test]
    fn malformed_edge_line_is_rejected() {
        assert_eq!(
            parse_dimacs("p edge 3 1\ne 0\n"),
            Err(PlanarityError::InvalidEdgeLine {
                line: 2,
                content: "e 0".into(),
            })
        );
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        assert_eq!(
            parse_dimacs("p edge 3 1\ne 0 7\n"),
            Err(PlanarityError::VertexOutOfRange {
                line: 2,
                vertex: 7,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn isolated_root_is_relabelled_away() {
        let text = "p edge 4 2\ne 1 2\ne 2 3\n";
        let g = parse_dimacs(text).unwrap();
        assert_eq!(g.adjacency, vec![vec![1], vec![0, 2], vec![1]]);
    }

    #[test]
    fn edgeless_graph_skips_normalization() {
        let g = parse_dimacs("p edge 3 0\n").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
    }
}
