//! cachestat agent library entry.
//!
//! Wires config, the shared-memory cache runtime, and the HTTP surface into a
//! single router. Consumed by the binary (`main.rs`), by hosts embedding the
//! cache runtime, and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod shm;
pub mod stats;
