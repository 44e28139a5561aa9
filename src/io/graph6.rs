//! Reader for the compact bit-packed graph encoding.
//!
//! The encoding opens with a variable-length vertex count followed by a bit
//! stream over the strict upper triangle of the adjacency matrix. Count
//! forms: a single byte `b` with `63 <= b < 126` encodes `b - 63` (0..=62);
//! the marker byte 126 opens an 18-bit form packed into three continuation
//! bytes; a doubled marker `126 126` opens a 36-bit form packed into six.
//! Continuation bytes are offset by 63 and contribute 6 bits each, high
//! bits first.
//!
//! The body packs 6 significant bits per byte, most significant first. Bit
//! `k` covers the pair `(x, y)` with `x` the faster-varying index and
//! `0 <= x < y < N`; a set bit inserts the edge in both adjacency rows.
//! Padding bits past the last pair are ignored; a stream that ends earlier
//! is an error.

use crate::error::PlanarityError;
use crate::graph::Graph;

/// Decode a compact-encoded graph from raw bytes.
pub fn parse_graph6(bytes: &[u8]) -> Result<Graph, PlanarityError> {
    let (vertex_count, consumed) = parse_vertex_count(bytes)?;
    let mut adjacency = vec![Vec::new(); vertex_count];

    if vertex_count > 1 {
        let pairs = vertex_count * (vertex_count - 1) / 2;
        let needed = consumed + pairs.div_ceil(6);
        if bytes.len() < needed {
            return Err(PlanarityError::TruncatedEncoding {
                needed,
                got: bytes.len(),
            });
        }

        let mut x = 0usize;
        let mut y = 1usize;
        'stream: for &byte in &bytes[consumed..] {
            for j in 0..6 {
                if (byte >> (5 - j)) & 1 == 1 {
                    adjacency[x].push(y);
                    adjacency[y].push(x);
                }
                x += 1;
                if x == y {
                    x = 0;
                    y += 1;
                    if y >= vertex_count {
                        break 'stream;
                    }
                }
            }
        }
    }

    Ok(Graph::new(adjacency))
}

/// Decode from text, trimming surrounding ASCII whitespace first.
pub fn parse_graph6_str(text: &str) -> Result<Graph, PlanarityError> {
    parse_graph6(text.trim().as_bytes())
}

/// Decode the leading vertex count; returns the count and the bytes it
/// occupied.
fn parse_vertex_count(bytes: &[u8]) -> Result<(usize, usize), PlanarityError> {
    let first = *bytes.first().ok_or(PlanarityError::EmptyEncoding)?;
    if first == 126 && bytes.get(1) == Some(&126) {
        Ok((unpack_count(bytes, 2, 6)?, 8))
    } else if first == 126 {
        Ok((unpack_count(bytes, 1, 3)?, 4))
    } else if (63..126).contains(&first) {
        Ok(((first - 63) as usize, 1))
    } else {
        Err(PlanarityError::InvalidCountByte(first))
    }
}

fn unpack_count(bytes: &[u8], offset: usize, len: usize) -> Result<usize, PlanarityError> {
    if bytes.len() < offset + len {
        return Err(PlanarityError::TruncatedEncoding {
            needed: offset + len,
            got: bytes.len(),
        });
    }
    let mut value = 0usize;
    for &b in &bytes[offset..offset + len] {
        if !(63..127).contains(&b) {
            return Err(PlanarityError::InvalidCountByte(b));
        }
        value = (value << 6) | (b - 63) as usize;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_count() {
        assert_eq!(parse_vertex_count(&[63]), Ok((0, 1)));
        assert_eq!(parse_vertex_count(&[68]), Ok((5, 1)));
        assert_eq!(parse_vertex_count(&[125]), Ok((62, 1)));
    }

    #[test]
    fn eighteen_bit_count() {
        // 126 opens three continuation bytes: ((63-63)<<12)|((64-63)<<6)|(65-63)
        assert_eq!(parse_vertex_count(&[126, 63, 64, 65]), Ok((66, 4)));
    }

    #[test]
    fn thirty_six_bit_count() {
        let bytes = [126, 126, 63, 63, 63, 63, 64, 65];
        assert_eq!(parse_vertex_count(&bytes), Ok((66, 8)));
    }

    #[test]
    fn count_errors() {
        assert_eq!(parse_vertex_count(&[]), Err(PlanarityError::EmptyEncoding));
        assert_eq!(
            parse_vertex_count(&[10]),
            Err(PlanarityError::InvalidCountByte(10))
        );
        assert_eq!(
            parse_vertex_count(&[126, 63]),
            Err(PlanarityError::TruncatedEncoding { needed: 4, got: 2 })
        );
        assert_eq!(
            parse_vertex_count(&[126, 126, 63]),
            Err(PlanarityError::TruncatedEncoding { needed: 8, got: 3 })
        );
    }

    #[test]
    fn decodes_a_single_edge() {
        // two vertices, one pair bit set (high bit of the 6-bit group)
        let g = parse_graph6(&[65, 0b100000]).unwrap();
        assert_eq!(g.adjacency, vec![vec![1], vec![0]]);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn decodes_a_triangle() {
        // pairs (0,1), (0,2), (1,2) all set
        let g = parse_graph6(&[66, 0b111000]).unwrap();
        assert_eq!(g.adjacency, vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
    }

    #[test]
    fn empty_and_singleton_graphs_need_no_body() {
        assert_eq!(parse_graph6(&[63]).unwrap().vertex_count(), 0);
        assert_eq!(parse_graph6(&[64]).unwrap().vertex_count(), 1);
    }

    #[test]
    fn truncated_body_is_an_error() {
        assert_eq!(
            parse_graph6(&[66]),
            Err(PlanarityError::TruncatedEncoding { needed: 2, got: 1 })
        );
    }

    #[test]
    fn padding_bits_are_ignored() {
        // triangle needs 3 bits; the trailing three are padding
        let g = parse_graph6(&[66, 0b111111]).unwrap();
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn str_wrapper_trims_whitespace() {
        let g = parse_graph6_str("@ \n").unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }
}
