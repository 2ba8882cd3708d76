//!
//! ratiocycle: parametric optimization on weighted directed graphs
//!
//! # Algorithms
//!
//! * negative cycle detection by Howard's policy iteration ([`neg_cycle`])
//! * parametric network optimization ([`parametric`])
//! * minimum / maximum cost-to-time ratio cycle ([`cycle_ratio`])
//!
//! Graphs are `petgraph::graph::DiGraph`; edge weights, node potentials
//! and ratios are polymorphic over ordered rings and fields, so both
//! `f64` and exact rationals work throughout.
//!
pub mod common;
pub mod cycle_ratio;
pub mod error;
pub mod mocks;
pub mod neg_cycle;
pub mod parametric;
pub mod prelude;
pub mod weight;
