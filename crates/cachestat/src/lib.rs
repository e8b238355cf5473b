//! Top-level facade crate for cachestat.
//!
//! Re-exports core types and the agent library so users can depend on a single crate.

pub mod core {
    pub use cachestat_core::*;
}

pub mod agent {
    pub use cachestat_agent::*;
}
