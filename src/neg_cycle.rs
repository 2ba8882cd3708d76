//!
//! Negative cycle detection by Howard's policy iteration
//!
//! Alternates Bellman-Ford relaxation passes with cycle extraction on the
//! policy graph (the functional graph induced by the predecessor map).
//! Cycles are handed out lazily; the caller may stop consuming at any
//! point, re-parameterise the weight function and start over.
//!
//! # References
//!
//! * Dasdan, Irani, Gupta: Efficient algorithms for optimum cycle mean
//!   and optimum cost to time ratio problems (DAC 1999)
//!
use crate::common::{Cycle, EdgeIndex, NodeIndex};
use crate::weight::OrderedRing;
use fnv::FnvHashMap;
use log::trace;
use petgraph::graph::{DiGraph, NodeIndices};
use petgraph::visit::EdgeRef;
use std::collections::VecDeque;

///
/// Negative cycle finder over a borrowed digraph.
///
/// The policy map (`pred`) records, for each node, the incoming edge that
/// most recently improved its potential. It lives only across one
/// `howard` invocation and is never exposed.
///
pub struct NegCycleFinder<'a, N, E> {
    graph: &'a DiGraph<N, E>,
    /// `pred[v] = (u, e)` means edge `e: u -> v` last improved `dist[v]`
    pred: Vec<Option<(NodeIndex, EdgeIndex)>>,
}

impl<'a, N, E> NegCycleFinder<'a, N, E> {
    pub fn new(graph: &'a DiGraph<N, E>) -> Self {
        NegCycleFinder {
            graph,
            pred: vec![None; graph.node_count()],
        }
    }

    ///
    /// One Bellman-Ford pass over all edges in graph iteration order.
    ///
    /// For every edge `e: u -> v`, if `dist[u] + w(e) < dist[v]` the
    /// potential and the policy entry of `v` are updated. Returns whether
    /// anything changed; a `false` return means neither `dist` nor the
    /// policy moved.
    ///
    pub fn relax<D, F>(&mut self, dist: &mut [D], weight: F) -> bool
    where
        D: OrderedRing,
        F: Fn(&E) -> D,
    {
        self.relax_with(dist, weight, |_, _| true)
    }

    ///
    /// `relax` with an update guard: an improvement is only committed
    /// when `update_ok(current, candidate)` holds.
    ///
    pub fn relax_with<D, F, G>(&mut self, dist: &mut [D], weight: F, update_ok: G) -> bool
    where
        D: OrderedRing,
        F: Fn(&E) -> D,
        G: Fn(&D, &D) -> bool,
    {
        assert_eq!(dist.len(), self.graph.node_count());
        let mut changed = false;
        for u in self.graph.node_indices() {
            for edge in self.graph.edges(u) {
                let v = edge.target();
                let distance = dist[u.index()].clone() + weight(edge.weight());
                if dist[v.index()] > distance && update_ok(&dist[v.index()], &distance) {
                    dist[v.index()] = distance;
                    self.pred[v.index()] = Some((u, edge.id()));
                    changed = true;
                }
            }
        }
        changed
    }

    ///
    /// Lazily yield one node per cycle of the current policy graph.
    ///
    /// Colour-by-seed scheme: every walk along policy links marks the
    /// nodes it touches with its seed node. A walk that runs into its own
    /// seed's territory has closed a new cycle; a walk that enters
    /// another seed's territory stops without yielding, since that cycle
    /// was already claimed. Each node is entered at most twice over all
    /// seeds, and every policy cycle is yielded exactly once.
    ///
    pub fn find_cycle(&self) -> PolicyCycles {
        PolicyCycles {
            pred: &self.pred,
            seeds: self.graph.node_indices(),
            visited: FnvHashMap::default(),
        }
    }

    ///
    /// Reconstruct the policy cycle through `handle` by walking
    /// predecessor links until the walk returns to `handle`.
    ///
    /// Edges come out in reverse traversal order: the source of each edge
    /// is the target of the edge that follows it.
    ///
    /// Panics if `handle` has no policy entry (contract violation; only
    /// nodes yielded by `find_cycle` are valid handles).
    ///
    pub fn cycle_list(&self, handle: NodeIndex) -> Cycle {
        let mut vtx = handle;
        let mut cycle = Vec::new();
        loop {
            let (utx, edge) = self.pred[vtx.index()].expect("node has no policy entry");
            cycle.push(edge);
            vtx = utx;
            if vtx == handle {
                break;
            }
        }
        Cycle::new(cycle)
    }

    ///
    /// Check that the policy cycle through `handle` is still negative
    /// under the current potentials: some edge `e: u -> v` on it violates
    /// `dist[v] >= dist[u] + w(e)`.
    ///
    pub fn is_negative<D, F>(&self, handle: NodeIndex, dist: &[D], weight: F) -> bool
    where
        D: OrderedRing,
        F: Fn(&E) -> D,
    {
        let mut vtx = handle;
        loop {
            let (utx, edge) = self.pred[vtx.index()].expect("node has no policy entry");
            let ew = self.graph.edge_weight(edge).unwrap();
            if dist[vtx.index()] > dist[utx.index()].clone() + weight(ew) {
                return true;
            }
            vtx = utx;
            if vtx == handle {
                break;
            }
        }
        false
    }

    ///
    /// Lazily produce negative cycles of the graph under `weight`.
    ///
    /// Repeats `relax` until either a pass changes nothing (no negative
    /// cycle remains, the stream ends) or the policy graph contains
    /// verified negative cycles (they are all yielded, then the stream
    /// ends; the caller re-parameterises and calls `howard` again).
    ///
    /// The policy map is cleared on entry. On a clean exhaustion the
    /// potentials satisfy `dist[v] <= dist[u] + w(e)` for every edge.
    ///
    pub fn howard<'b, D, F>(
        &'b mut self,
        dist: &'b mut [D],
        weight: F,
    ) -> CycleStream<'a, 'b, N, E, D, F>
    where
        D: OrderedRing,
        F: Fn(&E) -> D,
    {
        self.howard_with(dist, weight, update_always::<D> as fn(&D, &D) -> bool)
    }

    ///
    /// `howard` with an update guard (see `relax_with`).
    ///
    pub fn howard_with<'b, D, F, G>(
        &'b mut self,
        dist: &'b mut [D],
        weight: F,
        update_ok: G,
    ) -> CycleStream<'a, 'b, N, E, D, F, G>
    where
        D: OrderedRing,
        F: Fn(&E) -> D,
        G: Fn(&D, &D) -> bool,
    {
        self.pred.clear();
        self.pred.resize(self.graph.node_count(), None);
        CycleStream {
            finder: self,
            dist,
            weight,
            update_ok,
            pending: VecDeque::new(),
            found: false,
            passes_left: usize::MAX,
        }
    }
}

fn update_always<D>(_current: &D, _candidate: &D) -> bool {
    true
}

///
/// Iterator over one node per cycle of a policy graph
/// (see `NegCycleFinder::find_cycle`)
///
pub struct PolicyCycles<'b> {
    pred: &'b [Option<(NodeIndex, EdgeIndex)>],
    seeds: NodeIndices,
    /// which seed last claimed each node
    visited: FnvHashMap<NodeIndex, NodeIndex>,
}

impl<'b> Iterator for PolicyCycles<'b> {
    type Item = NodeIndex;
    fn next(&mut self) -> Option<NodeIndex> {
        while let Some(seed) = self.seeds.next() {
            if self.visited.contains_key(&seed) {
                continue;
            }
            let mut utx = seed;
            loop {
                self.visited.insert(utx, seed);
                match self.pred[utx.index()] {
                    None => break,
                    Some((p, _)) => {
                        utx = p;
                        if let Some(&owner) = self.visited.get(&utx) {
                            if owner == seed {
                                return Some(utx);
                            }
                            break;
                        }
                    }
                }
            }
        }
        None
    }
}

///
/// Lazy stream of negative cycles (see `NegCycleFinder::howard`)
///
pub struct CycleStream<'a, 'b, N, E, D, F, G = fn(&D, &D) -> bool> {
    finder: &'b mut NegCycleFinder<'a, N, E>,
    dist: &'b mut [D],
    weight: F,
    update_ok: G,
    /// cycle handles detected in the current pass, not yet handed out
    pending: VecDeque<NodeIndex>,
    found: bool,
    passes_left: usize,
}

impl<'a, 'b, N, E, D, F, G> CycleStream<'a, 'b, N, E, D, F, G> {
    ///
    /// Bound the number of relax passes. Exceeding the budget ends the
    /// stream as if no negative cycle remained; intended as a safety net
    /// for floating-point weights that cycle within rounding error.
    ///
    pub fn with_pass_limit(mut self, max_passes: usize) -> Self {
        self.passes_left = max_passes;
        self
    }
}

impl<'a, 'b, N, E, D, F, G> Iterator for CycleStream<'a, 'b, N, E, D, F, G>
where
    D: OrderedRing,
    F: Fn(&E) -> D,
    G: Fn(&D, &D) -> bool,
{
    type Item = Cycle;
    fn next(&mut self) -> Option<Cycle> {
        if let Some(handle) = self.pending.pop_front() {
            return Some(self.finder.cycle_list(handle));
        }
        if self.found {
            return None;
        }
        loop {
            if self.passes_left == 0 {
                trace!("relax pass budget exhausted, ending cycle stream");
                return None;
            }
            self.passes_left -= 1;
            if !self.finder.relax_with(self.dist, &self.weight, &self.update_ok) {
                return None;
            }
            for handle in self.finder.find_cycle() {
                if self.finder.is_negative(handle, self.dist, &self.weight) {
                    self.pending.push_back(handle);
                }
            }
            if let Some(handle) = self.pending.pop_front() {
                self.found = true;
                return Some(self.finder.cycle_list(handle));
            }
        }
    }
}

//
// tests
//
