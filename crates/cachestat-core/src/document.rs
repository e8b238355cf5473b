//! The served stats document.

use serde::{Deserialize, Serialize};

use crate::runtime::CacheRuntime;
use crate::snapshot::{SharedMemoryInfo, Snapshot, SystemStats, UserStats};

/// `{"system_stats": {..}, "user_stats": {..}, "shared_memory": {..}}`
///
/// Every key is always present and always an object; absent sources are
/// `{}`, never `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsDocument {
    #[serde(default)]
    pub system_stats: SystemStats,
    #[serde(default)]
    pub user_stats: UserStats,
    #[serde(default)]
    pub shared_memory: SharedMemoryInfo,
}

impl StatsDocument {
    /// Take a fresh snapshot of all three sources.
    pub fn collect(runtime: &dyn CacheRuntime) -> Self {
        Self::from_parts(
            runtime.system_cache_info(),
            runtime.user_cache_info(),
            runtime.shared_memory_info(),
        )
    }

    pub fn from_parts(
        system_stats: Option<SystemStats>,
        user_stats: Option<UserStats>,
        shared_memory: Option<SharedMemoryInfo>,
    ) -> Self {
        Self {
            system_stats: or_empty("system_stats", system_stats),
            user_stats: or_empty("user_stats", user_stats),
            shared_memory: or_empty("shared_memory", shared_memory),
        }
    }

    pub fn to_json(&self) -> String {
        // A map of JSON values with string keys always serializes.
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"system_stats":{},"user_stats":{},"shared_memory":{}}"#.to_string()
        })
    }
}

fn or_empty(section: &'static str, snap: Option<Snapshot>) -> Snapshot {
    match snap {
        Some(s) => s,
        None => {
            tracing::debug!(section, "stats source unavailable");
            Snapshot::new()
        }
    }
}
