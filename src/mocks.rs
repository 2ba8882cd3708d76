//!
//! Small named graphs and seeded random graphs used in tests and benches
//!
use crate::common::{ni, Rational};
use crate::cycle_ratio::CostTime;
use petgraph::graph::DiGraph;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Three nodes, six edges, every cycle has positive total weight.
///
/// ```text
///   +--> 1 <--+
///   |   |     |
///   7   0     1
///   |   v     |
///   +-- 0 <-> 2
/// ```
pub fn mock_positive_triangle() -> DiGraph<(), i64> {
    let mut g = DiGraph::new();
    g.extend_with_edges(&[(0, 1, 7), (1, 2, 3), (2, 0, 2), (0, 2, 5), (2, 1, 1), (1, 0, 0)]);
    g
}

/// Triangle with one strongly negative edge; total weight -1.
pub fn mock_negative_triangle() -> DiGraph<(), i64> {
    let mut g = DiGraph::new();
    g.extend_with_edges(&[(0, 1, 1), (1, 2, 2), (2, 0, -4)]);
    g
}

/// Four-cycle with (cost, time) attributes, optimum ratio -1/4.
pub fn mock_timing_ring() -> DiGraph<(), CostTime<f64>> {
    let mut g = DiGraph::new();
    g.extend_with_edges(&[
        (0, 1, CostTime::new(2.0, 1.0)),
        (1, 2, CostTime::new(3.0, 1.0)),
        (2, 3, CostTime::new(1.0, 1.0)),
        (3, 0, CostTime::new(-7.0, 1.0)),
    ]);
    g
}

/// Two rings through a hub: ratio 2 on the two-cycle 0 <-> 1 and
/// ratio 4 on the two-cycle 0 <-> 2.
pub fn mock_two_rings() -> DiGraph<(), CostTime<f64>> {
    let mut g = DiGraph::new();
    g.extend_with_edges(&[
        (0, 1, CostTime::new(5.0, 1.0)),
        (1, 0, CostTime::new(-1.0, 1.0)),
        (0, 2, CostTime::new(10.0, 1.0)),
        (2, 0, CostTime::new(-2.0, 1.0)),
    ]);
    g
}

/// A two-cycle whose total time cancels to zero (degenerate ratio).
/// Its parametric weight sums to -2 at every ratio, so solvers always
/// run into it.
pub fn mock_zero_time_ring() -> DiGraph<(), CostTime<f64>> {
    let mut g = DiGraph::new();
    g.extend_with_edges(&[
        (0, 1, CostTime::new(-1.0, 1.0)),
        (1, 0, CostTime::new(-1.0, -1.0)),
    ]);
    g
}

/// Random digraph with integer weights in [-10, 10].
/// Parallel edges and self loops can occur.
pub fn mock_random(n_nodes: usize, n_edges: usize, seed: u64) -> DiGraph<(), i64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut g = DiGraph::new();
    for _ in 0..n_nodes {
        g.add_node(());
    }
    for _ in 0..n_edges {
        let u = rng.gen_range(0..n_nodes);
        let v = rng.gen_range(0..n_nodes);
        let w = rng.gen_range(-10..=10);
        g.add_edge(ni(u), ni(v), w);
    }
    g
}

/// Random digraph with nonnegative integer weights in [0, 10];
/// guaranteed free of negative cycles.
pub fn mock_random_nonnegative(n_nodes: usize, n_edges: usize, seed: u64) -> DiGraph<(), i64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut g = DiGraph::new();
    for _ in 0..n_nodes {
        g.add_node(());
    }
    for _ in 0..n_edges {
        let u = rng.gen_range(0..n_nodes);
        let v = rng.gen_range(0..n_nodes);
        let w = rng.gen_range(0..=10);
        g.add_edge(ni(u), ni(v), w);
    }
    g
}

/// Random digraph with exact-rational (cost, time) attributes:
/// cost in [-10, 10], time in [1, 10].
pub fn mock_random_timing(
    n_nodes: usize,
    n_edges: usize,
    seed: u64,
) -> DiGraph<(), CostTime<Rational>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut g = DiGraph::new();
    for _ in 0..n_nodes {
        g.add_node(());
    }
    for _ in 0..n_edges {
        let u = rng.gen_range(0..n_nodes);
        let v = rng.gen_range(0..n_nodes);
        let cost = Rational::from_integer(rng.gen_range(-10..=10));
        let time = Rational::from_integer(rng.gen_range(1..=10));
        g.add_edge(ni(u), ni(v), CostTime::new(cost, time));
    }
    g
}

//
// tests
//
