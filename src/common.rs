//!
//! Index shorthands and the edge-cycle type shared across the crate
//!
use itertools::Itertools;
pub use petgraph::graph::{EdgeIndex, NodeIndex};

/// Exact ratio on 64bit integers
pub type Rational = num_rational::Ratio<i64>;

///
/// short-hand of `NodeIndex::new`
///
pub fn ni(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

///
/// short-hand of `EdgeIndex::new`
///
pub fn ei(index: usize) -> EdgeIndex {
    EdgeIndex::new(index)
}

///
/// Cycle: a non-empty closed walk stored as a list of edges.
///
/// Edges are stored in the order produced by walking predecessor links,
/// i.e. the source of an edge is the target of the edge that follows it.
/// Two cycles are equal iff one is a rotation of the other; the traversal
/// direction is part of the identity.
///
#[derive(Debug, Clone)]
pub struct Cycle(Vec<EdgeIndex>);

impl Cycle {
    pub fn new(edges: Vec<EdgeIndex>) -> Cycle {
        assert!(!edges.is_empty(), "cycle has no edges");
        Cycle(edges)
    }
    /// construct from raw edge indices
    pub fn from(indices: &[usize]) -> Cycle {
        Cycle::new(indices.iter().map(|&i| ei(i)).collect())
    }
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    ///
    /// rotate the cycle left by `k` edges, keeping the same closed walk
    ///
    pub fn rotated(&self, k: usize) -> Cycle {
        let n = self.0.len();
        let mut edges = self.0.clone();
        edges.rotate_left(k % n);
        Cycle(edges)
    }
    ///
    /// canonical rotation (lexicographically smallest), used for equality
    ///
    pub fn normalized(&self) -> Cycle {
        let n = self.0.len();
        (0..n)
            .map(|k| self.rotated(k))
            .min_by(|a, b| a.0.cmp(&b.0))
            .unwrap()
    }
}

impl PartialEq for Cycle {
    fn eq(&self, other: &Cycle) -> bool {
        self.0.len() == other.0.len() && self.normalized().0 == other.normalized().0
    }
}

impl Eq for Cycle {}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|e| e.index()).join(","))
    }
}

//
// tests
//
