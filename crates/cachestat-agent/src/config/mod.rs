//! Agent config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use cachestat_core::error::{CacheStatError, Result};

pub use schema::{AgentConfig, CacheSection, ServerSection};

pub const DEFAULT_CONFIG_PATH: &str = "cachestat.yaml";

pub fn load_from_file(path: &str) -> Result<AgentConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CacheStatError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<AgentConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path, "config file not found, using defaults");
            Ok(AgentConfig::default())
        }
        Err(e) => Err(CacheStatError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<AgentConfig> {
    let cfg: AgentConfig = serde_yaml::from_str(s)
        .map_err(|e| CacheStatError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
