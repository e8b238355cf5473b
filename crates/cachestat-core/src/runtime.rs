//! Cache runtime contract.
//!
//! The stats endpoint never owns cache state; it asks a runtime for three
//! independent snapshots on every request. `None` means the source is
//! unavailable (cache disabled, not yet initialised, ...).

use crate::snapshot::{SharedMemoryInfo, SystemStats, UserStats};

/// Read-only view over a cache subsystem.
pub trait CacheRuntime: Send + Sync {
    /// Opcode cache counters.
    fn system_cache_info(&self) -> Option<SystemStats>;
    /// User cache counters.
    fn user_cache_info(&self) -> Option<UserStats>;
    /// Shared memory allocator info.
    fn shared_memory_info(&self) -> Option<SharedMemoryInfo>;
}

/// Runtime used when caching is turned off. Every source is absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRuntime;

impl CacheRuntime for DisabledRuntime {
    fn system_cache_info(&self) -> Option<SystemStats> {
        None
    }

    fn user_cache_info(&self) -> Option<UserStats> {
        None
    }

    fn shared_memory_info(&self) -> Option<SharedMemoryInfo> {
        None
    }
}
