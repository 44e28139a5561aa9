//! Two-sided routing of back edges over the signed constraint graph.
//!
//! Propagation seeds each still-unplaced back edge on the left and pushes the
//! consequences: `same` neighbors keep the side, `opposite` neighbors take
//! the other, each edge entering a side at most once. The pass never aborts
//! on contradiction; an edge ending up on both sides is what the final
//! consistency check looks for. This is a balance check on the signed graph:
//! consistent iff the back edges can be split into two sides honoring every
//! constraint, which is exactly planarity of the underlying graph.

use hashbrown::HashSet as FastSet;

use crate::algs::conflict::{BackEdgeId, ConstraintGraph};

/// Left/right placement of back edges produced by propagation.
#[derive(Debug, Clone, Default)]
pub struct SideAssignment {
    pub left: FastSet<BackEdgeId>,
    pub right: FastSet<BackEdgeId>,
}

impl SideAssignment {
    /// True when no back edge was forced onto both sides.
    pub fn is_consistent(&self) -> bool {
        self.left.intersection(&self.right).next().is_none()
    }
}

/// Propagate side constraints across every component of `constraints`.
///
/// Seeds are taken in ascending identifier order and neighbor sets are
/// visited sorted, so the returned assignment is reproducible; the
/// consistency verdict itself does not depend on either order.
pub fn resolve_constraints(constraints: &ConstraintGraph) -> SideAssignment {
    let mut assignment = SideAssignment::default();
    for id in constraints.back_edge_ids() {
        if assignment.left.contains(&id) || assignment.right.contains(&id) {
            continue;
        }
        place(constraints, id, false, &mut assignment);
    }
    assignment
}

fn place(
    constraints: &ConstraintGraph,
    id: BackEdgeId,
    is_right: bool,
    assignment: &mut SideAssignment,
) {
    let Some(c) = constraints.constraints(id) else {
        return;
    };
    let (to_left, to_right) = if is_right {
        (&c.opposite, &c.same)
    } else {
        (&c.same, &c.opposite)
    };
    let mut to_left: Vec<BackEdgeId> = to_left.iter().copied().collect();
    let mut to_right: Vec<BackEdgeId> = to_right.iter().copied().collect();
    to_left.sort_unstable();
    to_right.sort_unstable();

    for other in to_left {
        if !assignment.left.contains(&other) {
            assignment.left.insert(other);
            place(constraints, other, false, assignment);
        }
    }
    for other in to_right {
        if !assignment.right.contains(&other) {
            assignment.right.insert(other);
            place(constraints, other, true, assignment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::low_point::compute_low_points;
    use crate::algs::spanning_forest::build_spanning_forest;
    use crate::graph::Graph;

    fn resolve(adjacency: Vec<Vec<usize>>) -> SideAssignment {
        let forest = build_spanning_forest(&Graph::new(adjacency));
        let low_points = compute_low_points(&forest);
        resolve_constraints(&crate::algs::conflict::build_constraint_graph(
            &forest,
            &low_points,
        ))
    }

    #[test]
    fn empty_constraint_graph_is_consistent() {
        let assignment = resolve(vec![vec![1], vec![0, 2], vec![1]]);
        assert!(assignment.is_consistent());
        assert!(assignment.left.is_empty() && assignment.right.is_empty());
    }

    #[test]
    fn unconstrained_cycle_is_consistent() {
        let assignment = resolve(vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]]);
        assert!(assignment.is_consistent());
    }

    #[test]
    fn contradictory_pair_lands_on_both_sides() {
        // K3,3 produces a pair marked both same and opposite.
        let assignment = resolve(vec![
            vec![3, 4, 5],
            vec![3, 4, 5],
            vec![3, 4, 5],
            vec![0, 1, 2],
            vec![0, 1, 2],
            vec![0, 1, 2],
        ]);
        assert!(!assignment.is_consistent());
    }

    #[test]
    fn resolution_is_reproducible() {
        let adjacency = vec![
            vec![1, 2, 3, 4],
            vec![0, 2, 3, 4],
            vec![0, 1, 3, 4],
            vec![0, 1, 2, 4],
            vec![0, 1, 2, 3],
        ];
        let a = resolve(adjacency.clone());
        let b = resolve(adjacency);
        let sorted = |s: &FastSet<BackEdgeId>| {
            let mut v: Vec<_> = s.iter().copied().collect();
            v.sort_unstable();
            v
        };
        assert_eq!(sorted(&a.left), sorted(&b.left));
        assert_eq!(sorted(&a.right), sorted(&b.right));
    }
}
