//!
//! Weight-domain abstractions used by the relaxation engine
//!
//! The finder only needs a totally ordered commutative ring; the
//! parametric solvers additionally need division, i.e. a totally ordered
//! field. `f64`, the integers and `num_rational::Ratio` all qualify for
//! the ring; `f64` and `Ratio` for the field.
//!
use crate::common::Cycle;
use itertools::Itertools;
use num_traits::{Num, Zero};
use petgraph::graph::DiGraph;
use std::ops::{Mul, Sub};

///
/// Totally ordered commutative ring: the domain of edge weights and node
/// potentials during relaxation.
///
pub trait OrderedRing: Clone + PartialOrd + Zero + Sub<Output = Self> + Mul<Output = Self> {}

impl<T> OrderedRing for T where T: Clone + PartialOrd + Zero + Sub<Output = T> + Mul<Output = T> {}

///
/// Totally ordered field: the domain of ratio values.
///
pub trait OrderedField: Clone + PartialOrd + Num {}

impl<T> OrderedField for T where T: Clone + PartialOrd + Num {}

///
/// Total weight of a cycle under the given edge-weight function
///
pub fn total_weight<N, E, D, F>(graph: &DiGraph<N, E>, cycle: &Cycle, weight: F) -> D
where
    D: OrderedRing,
    F: Fn(&E) -> D,
{
    cycle.edges().iter().fold(D::zero(), |acc, &edge| {
        let ew = graph.edge_weight(edge).unwrap();
        acc + weight(ew)
    })
}

///
/// Determine if a cycle is negative under the given edge-weight function
///
pub fn is_negative_cycle<N, E, D, F>(graph: &DiGraph<N, E>, cycle: &Cycle, weight: F) -> bool
where
    D: OrderedRing,
    F: Fn(&E) -> D,
{
    total_weight(graph, cycle, weight) < D::zero()
}

///
/// Check that consecutive edges of the cycle share an endpoint, i.e. the
/// edge list is a closed walk of the graph.
///
/// Edges are expected in predecessor order (the order `cycle_list`
/// produces): the source of each edge is the target of the next one.
///
pub fn is_closed_walk<N, E>(graph: &DiGraph<N, E>, cycle: &Cycle) -> bool {
    cycle
        .edges()
        .iter()
        .circular_tuple_windows()
        .all(|(&e, &f)| {
            match (graph.edge_endpoints(e), graph.edge_endpoints(f)) {
                // e = (u -> _), f = (_ -> w): the walk is closed iff u == w
                (Some((u, _)), Some((_, w))) => u == w,
                _ => false,
            }
        })
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Cycle;

    #[test]
    fn total_weight_triangle() {
        let mut g: DiGraph<(), i64> = DiGraph::new();
        g.extend_with_edges(&[(0, 1, 1), (1, 2, 2), (2, 0, -4)]);
        // reverse traversal order: 2->0, 1->2, 0->1
        let c = Cycle::from(&[2, 1, 0]);
        assert_eq!(total_weight(&g, &c, |&w| w), -1);
        assert!(is_negative_cycle(&g, &c, |&w| w));
        assert!(!is_negative_cycle(&g, &c, |&w| -w));
    }

    #[test]
    fn closed_walk() {
        let mut g: DiGraph<(), i64> = DiGraph::new();
        g.extend_with_edges(&[(0, 1, 0), (1, 2, 0), (2, 0, 0), (0, 2, 0)]);
        // 2->0, 1->2, 0->1 in predecessor order
        assert!(is_closed_walk(&g, &Cycle::from(&[2, 1, 0])));
        // rotations stay closed
        assert!(is_closed_walk(&g, &Cycle::from(&[1, 0, 2])));
        assert!(is_closed_walk(&g, &Cycle::from(&[0, 2, 1])));
        // 0->1 then 0->2 is not a closed walk
        assert!(!is_closed_walk(&g, &Cycle::from(&[0, 3])));
    }

    #[test]
    fn closed_walk_self_loop() {
        let mut g: DiGraph<(), i64> = DiGraph::new();
        g.extend_with_edges(&[(0, 1, 0), (1, 1, 0)]);
        assert!(is_closed_walk(&g, &Cycle::from(&[1])));
        assert!(!is_closed_walk(&g, &Cycle::from(&[0])));
    }
}
