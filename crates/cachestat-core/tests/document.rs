#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cachestat_core::{CacheRuntime, DisabledRuntime, SharedMemoryInfo, Snapshot, StatsDocument, SystemStats, UserStats};
use serde_json::json;

struct FixedRuntime {
    system: Option<Snapshot>,
    user: Option<Snapshot>,
    shm: Option<Snapshot>,
}

impl CacheRuntime for FixedRuntime {
    fn system_cache_info(&self) -> Option<SystemStats> {
        self.system.clone()
    }
    fn user_cache_info(&self) -> Option<UserStats> {
        self.user.clone()
    }
    fn shared_memory_info(&self) -> Option<SharedMemoryInfo> {
        self.shm.clone()
    }
}

#[test]
fn mixed_sources_keep_shape_and_order() {
    let rt = FixedRuntime {
        system: Some(Snapshot::new().with("hits", 10).with("misses", 2)),
        user: Some(Snapshot::new()),
        shm: Some(Snapshot::new().with("segments", 1).with("avail", 1_048_576)),
    };

    let doc = StatsDocument::collect(&rt);
    assert_eq!(
        doc.to_json(),
        r#"{"system_stats":{"hits":10,"misses":2},"user_stats":{},"shared_memory":{"segments":1,"avail":1048576}}"#
    );
}

#[test]
fn disabled_runtime_yields_empty_objects() {
    let doc = StatsDocument::collect(&DisabledRuntime);
    assert_eq!(
        doc.to_json(),
        r#"{"system_stats":{},"user_stats":{},"shared_memory":{}}"#
    );
}

#[test]
fn single_absent_source_is_empty_object_not_null() {
    let rt = FixedRuntime {
        system: Some(Snapshot::new().with("num_hits", 3)),
        user: None,
        shm: Some(Snapshot::new().with("num_seg", 2)),
    };

    let v: serde_json::Value = serde_json::from_str(&StatsDocument::collect(&rt).to_json()).unwrap();
    assert_eq!(v["user_stats"], json!({}));
    assert_eq!(v["system_stats"], json!({"num_hits": 3}));
    assert_eq!(v.as_object().unwrap().len(), 3);
}

#[test]
fn nested_values_pass_through_unmodified() {
    let system = Snapshot::new()
        .with("memory_type", "mmap")
        .with("locking_type", "spin")
        .with("fragmented", false)
        .with("fragmentation", 0.25)
        .with("cache_list", json!([{"filename": "/srv/index.php", "num_hits": 4}]));

    let doc = StatsDocument::from_parts(Some(system.clone()), None, None);
    let v: serde_json::Value = serde_json::from_str(&doc.to_json()).unwrap();
    assert_eq!(v["system_stats"], serde_json::to_value(&system).unwrap());
}

#[test]
fn document_parses_back_with_missing_sections() {
    let doc: StatsDocument = serde_json::from_str(r#"{"system_stats":{"num_hits":1}}"#).unwrap();
    assert!(doc.user_stats.is_empty());
    assert!(doc.shared_memory.is_empty());
    assert_eq!(doc.system_stats.count(&["num_hits"]), 1);
}
