//!
//! globally-available parts
//!
pub use crate::common::{ei, ni, Cycle, Rational};
pub use crate::cycle_ratio::{
    from_attrs, set_default, Attr, CostTime, CycleRatioAPI, EdgeAttrs, MaxCycleRatioSolver,
    MinCycleRatioSolver,
};
pub use crate::error::Error;
pub use crate::neg_cycle::NegCycleFinder;
pub use crate::parametric::{MaxParametricSolver, MinParametricSolver, ParametricAPI};
pub use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
