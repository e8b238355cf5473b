//! cachestat core: snapshot types, the cache runtime contract, and the
//! composed stats document.
//!
//! This crate defines the JSON shape served to monitoring agents and the
//! read-only interface a cache subsystem implements to feed it. It carries no
//! HTTP or async runtime dependencies so the same document can be built from
//! any host.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Absent or malformed counters degrade to empty objects or zero values.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod document;
pub mod error;
pub mod runtime;
pub mod snapshot;
pub mod summary;

pub use document::StatsDocument;
/// Shared result type.
pub use error::{CacheStatError, Result};
pub use runtime::{CacheRuntime, DisabledRuntime};
pub use snapshot::{SharedMemoryInfo, Snapshot, SystemStats, UserStats};
