//! Read-only counter snapshots.
//!
//! A snapshot is an insertion-ordered JSON object. Values are passed through
//! untouched so whatever the cache runtime reports reaches the wire as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One key/value counter snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Map<String, Value>);

/// Opcode cache counters.
pub type SystemStats = Snapshot;
/// User key/value cache counters.
pub type UserStats = Snapshot;
/// Shared memory segment sizes and availability.
pub type SharedMemoryInfo = Snapshot;

impl Snapshot {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert; keeps insertion order.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// First key in `keys` holding a number, as `f64`. Missing or
    /// non-numeric values read as `0.0`.
    pub fn number(&self, keys: &[&str]) -> f64 {
        keys.iter()
            .find_map(|k| self.0.get(*k))
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                _ => None,
            })
            .unwrap_or(0.0)
    }

    /// Same lookup as [`Snapshot::number`], truncated to `u64`.
    pub fn count(&self, keys: &[&str]) -> u64 {
        let n = self.number(keys);
        if n.is_finite() && n > 0.0 {
            n as u64
        } else {
            0
        }
    }
}

impl From<Map<String, Value>> for Snapshot {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
