use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cachestat_core::error::Result;
use cachestat_core::{CacheRuntime, SharedMemoryInfo, SystemStats, UserStats};

use crate::config::CacheSection;
use crate::shm::{EntryCache, SegmentAllocator};

/// Opcode + user caches sharing one allocator.
#[derive(Debug)]
pub struct SharedMemoryRuntime {
    allocator: Arc<SegmentAllocator>,
    system: EntryCache,
    user: EntryCache,
}

impl SharedMemoryRuntime {
    pub fn new(cfg: &CacheSection) -> Result<Self> {
        let allocator = Arc::new(SegmentAllocator::new(cfg.segments, cfg.segment_size)?);
        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Ok(Self {
            system: EntryCache::new(
                "system",
                Arc::clone(&allocator),
                cfg.system_slots,
                Duration::ZERO,
                start_time,
            ),
            user: EntryCache::new(
                "user",
                Arc::clone(&allocator),
                cfg.user_slots,
                Duration::from_secs(cfg.user_ttl_secs),
                start_time,
            ),
            allocator,
        })
    }

    /// Opcode cache, keyed by script path.
    pub fn system(&self) -> &EntryCache {
        &self.system
    }

    pub fn user(&self) -> &EntryCache {
        &self.user
    }

    pub fn allocator(&self) -> &SegmentAllocator {
        &self.allocator
    }
}

impl CacheRuntime for SharedMemoryRuntime {
    fn system_cache_info(&self) -> Option<SystemStats> {
        Some(self.system.info())
    }

    fn user_cache_info(&self) -> Option<UserStats> {
        Some(self.user.info())
    }

    fn shared_memory_info(&self) -> Option<SharedMemoryInfo> {
        Some(self.allocator.info())
    }
}
