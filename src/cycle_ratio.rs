//!
//! Minimum / maximum cost-to-time ratio cycles
//!
//! Cost/time instantiation of the parametric solvers: the parametric
//! weight of an edge is `cost - r * time`, and the break-even ratio of a
//! cycle is `sum(cost) / sum(time)`.
//!
use crate::common::Cycle;
use crate::error::Error;
use crate::parametric::{MaxParametricSolver, MinParametricSolver, ParametricAPI};
use crate::weight::OrderedField;
use num_traits::Zero;
use petgraph::graph::DiGraph;

///
/// cost and time attributes of an edge
///
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CostTime<R> {
    pub cost: R,
    pub time: R,
}

impl<R> CostTime<R> {
    pub fn new(cost: R, time: R) -> CostTime<R> {
        CostTime { cost, time }
    }
}

fn cycle_totals<N, R>(graph: &DiGraph<N, CostTime<R>>, cycle: &Cycle) -> (R, R)
where
    R: OrderedField,
{
    cycle
        .edges()
        .iter()
        .fold((R::zero(), R::zero()), |(cost, time), &edge| {
            let ew = graph.edge_weight(edge).unwrap();
            (cost + ew.cost.clone(), time + ew.time.clone())
        })
}

///
/// Adapter for the minimum cost-to-time ratio problem.
///
/// `distance` is strictly decreasing in the ratio (for positive times),
/// so tightening the ratio downwards eventually cancels every cycle.
///
pub struct CycleRatioAPI<'a, N, R> {
    graph: &'a DiGraph<N, CostTime<R>>,
}

impl<'a, N, R> CycleRatioAPI<'a, N, R> {
    pub fn new(graph: &'a DiGraph<N, CostTime<R>>) -> Self {
        CycleRatioAPI { graph }
    }
}

impl<'a, N, R> ParametricAPI<CostTime<R>, R> for CycleRatioAPI<'a, N, R>
where
    R: OrderedField,
{
    fn distance(&self, ratio: &R, edge: &CostTime<R>) -> R {
        edge.cost.clone() - ratio.clone() * edge.time.clone()
    }

    fn zero_cancel(&self, cycle: &Cycle) -> Result<R, Error> {
        let (total_cost, total_time) = cycle_totals(self.graph, cycle);
        if total_time.is_zero() {
            return Err(Error::ZeroTimeCycle);
        }
        Ok(total_cost / total_time)
    }
}

///
/// Negated adapter for the maximum variant: `distance` is
/// `r * time - cost`, so cycles whose true ratio exceeds the guess turn
/// negative. `zero_cancel` is unchanged.
///
pub struct NegCycleRatioAPI<'a, N, R> {
    graph: &'a DiGraph<N, CostTime<R>>,
}

impl<'a, N, R> NegCycleRatioAPI<'a, N, R> {
    pub fn new(graph: &'a DiGraph<N, CostTime<R>>) -> Self {
        NegCycleRatioAPI { graph }
    }
}

impl<'a, N, R> ParametricAPI<CostTime<R>, R> for NegCycleRatioAPI<'a, N, R>
where
    R: OrderedField,
{
    fn distance(&self, ratio: &R, edge: &CostTime<R>) -> R {
        ratio.clone() * edge.time.clone() - edge.cost.clone()
    }

    fn zero_cancel(&self, cycle: &Cycle) -> Result<R, Error> {
        let (total_cost, total_time) = cycle_totals(self.graph, cycle);
        if total_time.is_zero() {
            return Err(Error::ZeroTimeCycle);
        }
        Ok(total_cost / total_time)
    }
}

///
/// Minimum cost-to-time ratio problem:
///
/// ```text
/// min  { sum(cost) / sum(time) : C a cycle of the graph }
/// ```
///
/// Convenience wrapper around `MinParametricSolver` with `CycleRatioAPI`.
///
pub struct MinCycleRatioSolver<'a, N, R> {
    graph: &'a DiGraph<N, CostTime<R>>,
}

impl<'a, N, R> MinCycleRatioSolver<'a, N, R>
where
    R: OrderedField + std::fmt::Debug,
{
    pub fn new(graph: &'a DiGraph<N, CostTime<R>>) -> Self {
        MinCycleRatioSolver { graph }
    }

    ///
    /// `r0` is a feasible upper bound: at `r0` the parametric graph has a
    /// negative cycle, or no cycle of interest exists and `(r0, None)` is
    /// returned.
    ///
    pub fn run(&self, dist: &mut [R], r0: R) -> Result<(R, Option<Cycle>), Error> {
        let omega = CycleRatioAPI::new(self.graph);
        let mut solver = MinParametricSolver::new(self.graph, omega);
        solver.run(dist, r0)
    }
}

///
/// Maximum cost-to-time ratio problem, via the negated adapter and the
/// max parametric solver. `r0` is a feasible lower bound.
///
pub struct MaxCycleRatioSolver<'a, N, R> {
    graph: &'a DiGraph<N, CostTime<R>>,
}

impl<'a, N, R> MaxCycleRatioSolver<'a, N, R>
where
    R: OrderedField + std::fmt::Debug,
{
    pub fn new(graph: &'a DiGraph<N, CostTime<R>>) -> Self {
        MaxCycleRatioSolver { graph }
    }

    pub fn run(&self, dist: &mut [R], r0: R) -> Result<(R, Option<Cycle>), Error> {
        let omega = NegCycleRatioAPI::new(self.graph);
        let mut solver = MaxParametricSolver::new(self.graph, omega);
        solver.run(dist, r0)
    }
}

//
// loader-side helpers
//

///
/// Edge attributes as loaded: either field may still be absent.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeAttrs<R> {
    pub cost: Option<R>,
    pub time: Option<R>,
}

///
/// Stable attribute keys of `EdgeAttrs`
///
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Attr {
    Cost,
    Time,
}

impl Attr {
    pub fn key(&self) -> &'static str {
        match self {
            Attr::Cost => "cost",
            Attr::Time => "time",
        }
    }
}

///
/// Fill an absent edge attribute with a default value. Attributes that
/// are already present are left untouched.
///
pub fn set_default<N, R>(graph: &mut DiGraph<N, EdgeAttrs<R>>, attr: Attr, value: R)
where
    R: Clone,
{
    for edge in graph.edge_weights_mut() {
        let slot = match attr {
            Attr::Cost => &mut edge.cost,
            Attr::Time => &mut edge.time,
        };
        if slot.is_none() {
            *slot = Some(value.clone());
        }
    }
}

///
/// Finalize loaded attributes into solver-facing `CostTime` weights.
/// Fails on the first edge still missing an attribute.
///
pub fn from_attrs<N, R>(graph: &DiGraph<N, EdgeAttrs<R>>) -> Result<DiGraph<N, CostTime<R>>, Error>
where
    N: Clone,
    R: Clone,
{
    for attrs in graph.edge_weights() {
        if attrs.cost.is_none() {
            return Err(Error::MissingAttr(Attr::Cost.key()));
        }
        if attrs.time.is_none() {
            return Err(Error::MissingAttr(Attr::Time.key()));
        }
    }
    Ok(graph.map(
        |_, n| n.clone(),
        |_, e| CostTime::new(e.cost.clone().unwrap(), e.time.clone().unwrap()),
    ))
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Rational;
    use crate::mocks::{mock_timing_ring, mock_two_rings, mock_zero_time_ring};
    use crate::weight::{is_closed_walk, total_weight};

    #[test]
    fn min_ratio_four_cycle() {
        let g = mock_timing_ring();
        let solver = MinCycleRatioSolver::new(&g);
        let mut dist = vec![0.0; 4];
        let (ratio, cycle) = solver.run(&mut dist, 0.0).unwrap();
        assert_eq!(ratio, -0.25);

        let cycle = cycle.unwrap();
        println!("cycle={}", cycle);
        assert_eq!(cycle.len(), 4);
        assert!(is_closed_walk(&g, &cycle));
        assert_eq!(total_weight(&g, &cycle, |e| e.cost), -1.0);
        assert_eq!(total_weight(&g, &cycle, |e| e.time), 4.0);
    }

    #[test]
    fn min_ratio_two_candidate_rings() {
        let g = mock_two_rings();
        let solver = MinCycleRatioSolver::new(&g);
        let mut dist = vec![0.0; 3];
        let (ratio, cycle) = solver.run(&mut dist, 10.0).unwrap();
        assert_eq!(ratio, 2.0);

        // the a <-> b ring: cost 4 over time 2
        let cycle = cycle.unwrap();
        assert_eq!(total_weight(&g, &cycle, |e| e.cost), 4.0);
        assert_eq!(total_weight(&g, &cycle, |e| e.time), 2.0);
        // the fixed point reproduces its own ratio
        let omega = CycleRatioAPI::new(&g);
        assert_eq!(omega.zero_cancel(&cycle).unwrap(), ratio);
    }

    #[test]
    fn max_ratio_two_candidate_rings() {
        let g = mock_two_rings();
        let solver = MaxCycleRatioSolver::new(&g);
        let mut dist = vec![0.0; 3];
        let (ratio, cycle) = solver.run(&mut dist, 0.0).unwrap();
        // the a <-> c ring: cost 8 over time 2
        assert_eq!(ratio, 4.0);
        let cycle = cycle.unwrap();
        assert_eq!(total_weight(&g, &cycle, |e| e.cost), 8.0);
    }

    #[test]
    fn zero_time_cycle_is_a_domain_error() {
        let g = mock_zero_time_ring();
        let solver = MinCycleRatioSolver::new(&g);
        let mut dist = vec![0.0; 2];
        let result = solver.run(&mut dist, 1.0);
        assert_eq!(result, Err(Error::ZeroTimeCycle));
    }

    #[test]
    fn min_ratio_exact_rational() {
        // the four-cycle of `mock_timing_ring`, in exact arithmetic
        let mut g: DiGraph<(), CostTime<Rational>> = DiGraph::new();
        let c = |x: i64| Rational::from_integer(x);
        g.extend_with_edges(&[
            (0, 1, CostTime::new(c(2), c(1))),
            (1, 2, CostTime::new(c(3), c(1))),
            (2, 3, CostTime::new(c(1), c(1))),
            (3, 0, CostTime::new(c(-7), c(1))),
        ]);
        let solver = MinCycleRatioSolver::new(&g);
        let mut dist = vec![c(0); 4];
        let (ratio, cycle) = solver.run(&mut dist, c(0)).unwrap();
        assert_eq!(ratio, Rational::new(-1, 4));
        assert_eq!(cycle.unwrap().len(), 4);
    }

    #[test]
    fn optimum_is_insensitive_to_initial_potentials() {
        let g = mock_two_rings();
        let solver = MinCycleRatioSolver::new(&g);

        let mut dist = vec![0.0; 3];
        let (r1, _) = solver.run(&mut dist, 10.0).unwrap();

        let mut dist = vec![5.0, -3.0, 1.0];
        let (r2, _) = solver.run(&mut dist, 10.0).unwrap();

        assert_eq!(r1, r2);
    }

    #[test]
    fn set_default_fills_only_missing() {
        let mut g: DiGraph<(), EdgeAttrs<f64>> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(
            a,
            b,
            EdgeAttrs {
                cost: Some(5.0),
                time: None,
            },
        );
        g.add_edge(
            b,
            a,
            EdgeAttrs {
                cost: None,
                time: Some(2.0),
            },
        );

        set_default(&mut g, Attr::Time, 1.0);
        assert_eq!(from_attrs(&g).unwrap_err(), Error::MissingAttr("cost"));

        set_default(&mut g, Attr::Cost, 0.0);
        let g = from_attrs(&g).unwrap();
        assert_eq!(g[g.find_edge(a, b).unwrap()], CostTime::new(5.0, 1.0));
        assert_eq!(g[g.find_edge(b, a).unwrap()], CostTime::new(0.0, 2.0));
    }

    #[test]
    fn dist_reflects_last_relaxation_on_error() {
        let g = mock_zero_time_ring();
        let solver = MinCycleRatioSolver::new(&g);
        let mut dist = vec![0.0; 2];
        let _ = solver.run(&mut dist, 1.0);
        // the relax passes that exposed the cycle left their potentials
        assert!(dist.iter().any(|&d| d != 0.0));
        assert_eq!(dist, vec![-2.0, -2.0]);
    }

    #[test]
    fn determinism() {
        let g = mock_two_rings();
        let run = || {
            let solver = MinCycleRatioSolver::new(&g);
            let mut dist = vec![0.0; 3];
            let (r, c) = solver.run(&mut dist, 10.0).unwrap();
            (r, c, dist)
        };
        assert_eq!(run(), run());
    }
}
