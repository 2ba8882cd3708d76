//!
//! Parametric network optimization by repeated negative-cycle cancellation
//!
//! The solvers iterate the negative cycle finder with a weight closure
//! parameterised by the current ratio guess. Every cycle the finder hands
//! back is re-evaluated through the adapter's `zero_cancel`; the best
//! break-even ratio becomes the next guess. A pass that improves nothing
//! is the fixed point.
//!
use crate::common::Cycle;
use crate::error::Error;
use crate::neg_cycle::NegCycleFinder;
use crate::weight::OrderedField;
use log::debug;
use petgraph::graph::DiGraph;

///
/// Adapter contract between a parametric solver and the concrete problem.
///
/// `distance` must be total and pure over all edges at every ratio the
/// solver can reach, and monotone in the ratio in one consistent
/// direction across all edges; that monotonicity is what makes the
/// fixed-point iteration converge. `zero_cancel` must be defined for
/// every cycle the finder can produce and reports a domain error (e.g. a
/// zero denominator) instead of a ratio.
///
pub trait ParametricAPI<E, R>
where
    R: OrderedField,
{
    /// parametric weight of an edge at the given ratio
    fn distance(&self, ratio: &R, edge: &E) -> R;
    /// break-even ratio of a cycle: the ratio at which its parametric
    /// weight sums to zero
    fn zero_cancel(&self, cycle: &Cycle) -> Result<R, Error>;
}

///
/// Minimum parametric problem:
///
/// ```text
/// min  r
/// s.t. dist[v] - dist[u] <= distance(r, e)  for all e: u -> v
/// ```
///
/// `run` starts from a feasible upper bound `r0` (the parametric graph
/// has a negative cycle at `r0`, unless no cycle matters at all) and
/// tightens the ratio strictly downwards until no negative cycle remains.
///
pub struct MinParametricSolver<'a, N, E, A> {
    ncf: NegCycleFinder<'a, N, E>,
    omega: A,
    pass_limit: usize,
}

impl<'a, N, E, A> MinParametricSolver<'a, N, E, A> {
    pub fn new(graph: &'a DiGraph<N, E>, omega: A) -> Self {
        MinParametricSolver {
            ncf: NegCycleFinder::new(graph),
            omega,
            pass_limit: usize::MAX,
        }
    }

    ///
    /// Bound the relax passes of each inner `howard` call (floating point
    /// safety net; exceedance is treated as "no more cycles", so the best
    /// ratio found so far is returned).
    ///
    pub fn with_pass_limit(mut self, max_passes: usize) -> Self {
        self.pass_limit = max_passes;
        self
    }

    ///
    /// Returns the optimum ratio and its argmin cycle, or `(r0, None)`
    /// when no cycle improved on the initial bound. Adapter errors are
    /// surfaced unchanged.
    ///
    pub fn run<R>(&mut self, dist: &mut [R], r0: R) -> Result<(R, Option<Cycle>), Error>
    where
        R: OrderedField + std::fmt::Debug,
        A: ParametricAPI<E, R>,
    {
        let mut r_best = r0;
        let mut c_best = None;
        loop {
            let mut improved = false;
            let ratio = r_best.clone();
            let MinParametricSolver {
                ncf,
                omega,
                pass_limit,
            } = self;
            let omega: &A = omega;
            let stream = ncf
                .howard(dist, |edge| omega.distance(&ratio, edge))
                .with_pass_limit(*pass_limit);
            for cycle in stream {
                let ri = omega.zero_cancel(&cycle)?;
                if ri < r_best {
                    debug!("ratio improved {:?} -> {:?}", r_best, ri);
                    r_best = ri;
                    c_best = Some(cycle);
                    improved = true;
                }
            }
            if !improved {
                break;
            }
        }
        Ok((r_best, c_best))
    }
}

///
/// Maximum parametric problem, the mirror image of `MinParametricSolver`:
/// `r0` is a feasible lower bound and the ratio is tightened strictly
/// upwards.
///
pub struct MaxParametricSolver<'a, N, E, A> {
    ncf: NegCycleFinder<'a, N, E>,
    omega: A,
    pass_limit: usize,
}

impl<'a, N, E, A> MaxParametricSolver<'a, N, E, A> {
    pub fn new(graph: &'a DiGraph<N, E>, omega: A) -> Self {
        MaxParametricSolver {
            ncf: NegCycleFinder::new(graph),
            omega,
            pass_limit: usize::MAX,
        }
    }

    /// see `MinParametricSolver::with_pass_limit`
    pub fn with_pass_limit(mut self, max_passes: usize) -> Self {
        self.pass_limit = max_passes;
        self
    }

    ///
    /// Returns the optimum ratio and its argmax cycle, or `(r0, None)`
    /// when no cycle improved on the initial bound.
    ///
    pub fn run<R>(&mut self, dist: &mut [R], r0: R) -> Result<(R, Option<Cycle>), Error>
    where
        R: OrderedField + std::fmt::Debug,
        A: ParametricAPI<E, R>,
    {
        let mut r_best = r0;
        let mut c_best = None;
        loop {
            let mut improved = false;
            let ratio = r_best.clone();
            let MaxParametricSolver {
                ncf,
                omega,
                pass_limit,
            } = self;
            let omega: &A = omega;
            let stream = ncf
                .howard(dist, |edge| omega.distance(&ratio, edge))
                .with_pass_limit(*pass_limit);
            for cycle in stream {
                let ri = omega.zero_cancel(&cycle)?;
                if ri > r_best {
                    debug!("ratio improved {:?} -> {:?}", r_best, ri);
                    r_best = ri;
                    c_best = Some(cycle);
                    improved = true;
                }
            }
            if !improved {
                break;
            }
        }
        Ok((r_best, c_best))
    }
}

//
// tests
//
