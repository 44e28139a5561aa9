//! The planarity query: validation, forest, low points, constraints,
//! resolution.

use crate::algs::conflict::build_constraint_graph;
use crate::algs::low_point::compute_low_points;
use crate::algs::resolve::resolve_constraints;
use crate::algs::spanning_forest::build_spanning_forest;
use crate::error::PlanarityError;
use crate::graph::Graph;

/// Decide whether `graph` can be drawn in the plane without edge crossings.
///
/// The graph must be symmetric (checked, see [`Graph::validate`]) and
/// connected with vertex 0 present (precondition, not checked: vertices
/// unreachable from 0 never enter the spanning forest and are ignored by
/// every later stage, so the verdict covers only vertex 0's component).
///
/// # Errors
/// Propagates the validator's [`PlanarityError`]; once validation passes the
/// pipeline always terminates with a verdict.
pub fn is_planar(graph: &Graph) -> Result<bool, PlanarityError> {
    graph.validate()?;
    let forest = build_spanning_forest(graph);
    let low_points = compute_low_points(&forest);
    let constraints = build_constraint_graph(&forest, &low_points);
    let assignment = resolve_constraints(&constraints);
    Ok(assignment.is_consistent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_vertex_path_is_planar() {
        let g = Graph::new(vec![vec![1], vec![0, 2], vec![1, 3], vec![2, 4], vec![3]]);
        assert_eq!(is_planar(&g), Ok(true));
    }

    #[test]
    fn complete_graph_on_five_vertices_is_not() {
        let g = Graph::new(vec![
            vec![1, 2, 3, 4],
            vec![0, 2, 3, 4],
            vec![0, 1, 3, 4],
            vec![0, 1, 2, 4],
            vec![0, 1, 2, 3],
        ]);
        assert_eq!(is_planar(&g), Ok(false));
    }

    #[test]
    fn asymmetric_input_is_rejected_before_traversal() {
        let g = Graph::new(vec![vec![1], vec![]]);
        assert_eq!(
            is_planar(&g),
            Err(PlanarityError::AsymmetricEdge { from: 0, to: 1 })
        );
    }
}
