//!
//! Error taxonomy of the solvers
//!
//! The negative cycle finder raises nothing of its own; contract
//! violations there are assertion failures. Only adapter-level domain
//! errors travel through the solvers, unchanged.
//!
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cycle whose total time is zero has no finite ratio.
    #[error("cycle has zero total time, its ratio is undefined")]
    ZeroTimeCycle,

    /// An edge is still missing a required attribute after loading.
    #[error("edge attribute `{0}` is missing")]
    MissingAttr(&'static str),
}
