use std::net::SocketAddr;

use serde::Deserialize;
use cachestat_core::error::{CacheStatError, Result};

use crate::router::{HEALTHZ_PATH, SUMMARY_PATH};
use crate::shm::allocator::ALIGN;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub cache: CacheSection,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            cache: CacheSection::default(),
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CacheStatError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Path the stats document is served on.
    #[serde(default = "default_stats_path")]
    pub stats_path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            stats_path: default_stats_path(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|e| {
            CacheStatError::BadConfig(format!("server.listen must be a valid SocketAddr: {e}"))
        })?;
        if !self.stats_path.starts_with('/') {
            return Err(CacheStatError::BadConfig(
                "server.stats_path must start with '/'".into(),
            ));
        }
        if self.stats_path == HEALTHZ_PATH || self.stats_path == SUMMARY_PATH {
            return Err(CacheStatError::BadConfig(format!(
                "server.stats_path collides with built-in route {}",
                self.stats_path
            )));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_stats_path() -> String {
    "/".into()
}

const MIN_SEGMENT_SIZE: usize = 64 * 1024;
const MAX_SEGMENT_SIZE: usize = 1024 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_segments")]
    pub segments: usize,

    #[serde(default = "default_segment_size")]
    pub segment_size: usize,

    #[serde(default = "default_slots")]
    pub system_slots: usize,

    #[serde(default = "default_slots")]
    pub user_slots: usize,

    /// 0 = entries never expire.
    #[serde(default)]
    pub user_ttl_secs: u64,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            segments: default_segments(),
            segment_size: default_segment_size(),
            system_slots: default_slots(),
            user_slots: default_slots(),
            user_ttl_secs: 0,
        }
    }
}

impl CacheSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=64).contains(&self.segments) {
            return Err(CacheStatError::BadConfig(
                "cache.segments must be between 1 and 64".into(),
            ));
        }
        if !(MIN_SEGMENT_SIZE..=MAX_SEGMENT_SIZE).contains(&self.segment_size) {
            return Err(CacheStatError::BadConfig(format!(
                "cache.segment_size must be between {MIN_SEGMENT_SIZE} and {MAX_SEGMENT_SIZE}"
            )));
        }
        if self.segment_size % ALIGN != 0 {
            return Err(CacheStatError::BadConfig(format!(
                "cache.segment_size must be a multiple of {ALIGN}"
            )));
        }
        if self.system_slots == 0 || self.user_slots == 0 {
            return Err(CacheStatError::BadConfig(
                "cache.system_slots and cache.user_slots must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}
fn default_segments() -> usize {
    1
}
fn default_segment_size() -> usize {
    32 * 1024 * 1024
}
fn default_slots() -> usize {
    4096
}
