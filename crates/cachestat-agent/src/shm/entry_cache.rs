//! Keyed cache whose entries live in the segment allocator.
//!
//! When the allocator is full the whole cache is expunged and the store is
//! retried once.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use cachestat_core::Snapshot;

use crate::shm::allocator::{Allocation, SegmentAllocator};

#[derive(Debug)]
struct Entry {
    value: Arc<[u8]>,
    allocation: Allocation,
    created: Instant,
    ttl: Option<Duration>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.ttl.is_some_and(|t| self.created.elapsed() >= t)
    }
}

#[derive(Debug)]
pub struct EntryCache {
    name: &'static str,
    slots: usize,
    default_ttl: Option<Duration>,
    start_time: u64,
    allocator: Arc<SegmentAllocator>,
    entries: DashMap<String, Entry>,
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    expunges: AtomicU64,
    mem_size: AtomicU64,
}

impl EntryCache {
    /// `default_ttl` of zero means entries never expire.
    pub fn new(
        name: &'static str,
        allocator: Arc<SegmentAllocator>,
        slots: usize,
        default_ttl: Duration,
        start_time: u64,
    ) -> Self {
        Self {
            name,
            slots,
            default_ttl: (!default_ttl.is_zero()).then_some(default_ttl),
            start_time,
            allocator,
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            expunges: AtomicU64::new(0),
            mem_size: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace `key`. Returns false if the value cannot fit even
    /// after an expunge. Values larger than a segment are rejected without
    /// touching live entries.
    pub fn store(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> bool {
        let size = key.len() + value.len();
        if !self.allocator.fits(size) {
            tracing::debug!(cache = self.name, key, size, "entry larger than a segment");
            return false;
        }
        let allocation = match self.allocator.alloc(size) {
            Some(a) => a,
            None => {
                self.expunge();
                match self.allocator.alloc(size) {
                    Some(a) => a,
                    None => {
                        tracing::debug!(cache = self.name, key, size, "entry does not fit");
                        return false;
                    }
                }
            }
        };

        let entry = Entry {
            value: Arc::from(value),
            allocation,
            created: Instant::now(),
            ttl: ttl.filter(|t| !t.is_zero()).or(self.default_ttl),
        };
        // count before publishing so a racing release never underflows
        self.mem_size.fetch_add(allocation.size as u64, Ordering::Relaxed);
        if let Some(old) = self.entries.insert(key.to_string(), entry) {
            self.release(&old);
        }

        self.inserts.fetch_add(1, Ordering::Relaxed);
        true
    }

    pub fn fetch(&self, key: &str) -> Option<Arc<[u8]>> {
        let expired = match self.entries.get(key) {
            Some(e) if !e.is_expired() => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(Arc::clone(&e.value));
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            // re-checked under the shard lock; a fresh store in between survives
            if let Some((_, e)) = self.entries.remove_if(key, |_, e| e.is_expired()) {
                self.release(&e);
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    pub fn delete(&self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some((_, e)) => {
                self.release(&e);
                true
            }
            None => false,
        }
    }

    /// Drop every entry and give its memory back to the allocator.
    pub fn expunge(&self) {
        let keys: Vec<String> = self.entries.iter().map(|r| r.key().clone()).collect();
        for k in &keys {
            self.delete(k);
        }
        self.expunges.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(cache = self.name, dropped = keys.len(), "cache expunged");
    }

    fn release(&self, e: &Entry) {
        self.allocator.free(e.allocation);
        self.mem_size.fetch_sub(e.allocation.size as u64, Ordering::Relaxed);
    }

    pub fn info(&self) -> Snapshot {
        Snapshot::new()
            .with("num_slots", self.slots)
            .with("ttl", self.default_ttl.map_or(0, |t| t.as_secs()))
            .with("num_hits", self.hits.load(Ordering::Relaxed))
            .with("num_misses", self.misses.load(Ordering::Relaxed))
            .with("num_inserts", self.inserts.load(Ordering::Relaxed))
            .with("num_entries", self.entries.len())
            .with("expunges", self.expunges.load(Ordering::Relaxed))
            .with("start_time", self.start_time)
            .with("mem_size", self.mem_size.load(Ordering::Relaxed))
            .with("memory_type", "mmap")
    }
}
