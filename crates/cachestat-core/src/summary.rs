//! Monitoring-side view of a stats document.
//!
//! Reads the counters the way the polling agent does: several runtimes name
//! the same counter differently (`nhits` vs `num_hits`), so every field is a
//! list of aliases tried in order. Missing counters read as zero. Only
//! instantaneous gauges are derived here, no per-interval deltas.

use serde::Serialize;

use crate::document::StatsDocument;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SharedMemorySummary {
    pub available_bytes: u64,
    pub segment_size: u64,
    pub segment_count: u64,
}

impl SharedMemorySummary {
    pub fn from_snapshot(s: &Snapshot) -> Self {
        Self {
            available_bytes: s.count(&["avail_mem"]),
            segment_size: s.count(&["seg_size"]),
            segment_count: s.count(&["nseg", "num_seg"]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheSummary {
    pub slots: u64,
    pub entries: u64,
    pub size_bytes: u64,
    pub expunges: u64,
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    /// Hit ratio in percent.
    pub effectiveness: f64,
}

impl CacheSummary {
    pub fn from_snapshot(s: &Snapshot) -> Self {
        let hits = s.count(&["nhits", "num_hits"]);
        let misses = s.count(&["nmisses", "num_misses"]);
        Self {
            slots: s.count(&["nslots", "num_slots"]),
            entries: s.count(&["nentries", "num_entries"]),
            size_bytes: s.count(&["mem_size"]),
            expunges: s.count(&["nexpunges", "num_expunges", "expunges"]),
            hits,
            misses,
            inserts: s.count(&["ninserts", "num_inserts"]),
            effectiveness: effectiveness(hits, misses),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsSummary {
    pub shared_memory: SharedMemorySummary,
    pub system_cache: CacheSummary,
    pub user_cache: CacheSummary,
}

impl StatsSummary {
    pub fn from_document(doc: &StatsDocument) -> Self {
        Self {
            shared_memory: SharedMemorySummary::from_snapshot(&doc.shared_memory),
            system_cache: CacheSummary::from_snapshot(&doc.system_stats),
            user_cache: CacheSummary::from_snapshot(&doc.user_stats),
        }
    }
}

/// `hits / (hits + misses) * 100`, zero without traffic.
pub fn effectiveness(hits: u64, misses: u64) -> f64 {
    let total = hits.saturating_add(misses);
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64 * 100.0
    }
}
