//! Shared application state for the cachestat agent.

use std::sync::Arc;

use cachestat_core::error::Result;
use cachestat_core::{CacheRuntime, DisabledRuntime};

use crate::config::AgentConfig;
use crate::shm::SharedMemoryRuntime;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AgentConfig,
    runtime: Arc<dyn CacheRuntime>,
    shared_memory: Option<Arc<SharedMemoryRuntime>>,
}

impl AppState {
    /// Build state with the runtime selected by `cache.enabled`.
    pub fn new(cfg: AgentConfig) -> Result<Self> {
        if !cfg.cache.enabled {
            return Ok(Self::with_runtime(cfg, Arc::new(DisabledRuntime)));
        }

        let shm = Arc::new(SharedMemoryRuntime::new(&cfg.cache)?);
        let runtime: Arc<dyn CacheRuntime> = shm.clone();
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, runtime, shared_memory: Some(shm) }),
        })
    }

    /// Serve stats from a runtime owned by the host process.
    pub fn with_runtime(cfg: AgentConfig, runtime: Arc<dyn CacheRuntime>) -> Self {
        Self { inner: Arc::new(AppStateInner { cfg, runtime, shared_memory: None }) }
    }

    pub fn cfg(&self) -> &AgentConfig {
        &self.inner.cfg
    }

    pub fn runtime(&self) -> Arc<dyn CacheRuntime> {
        Arc::clone(&self.inner.runtime)
    }

    /// The built-in shared-memory runtime, when [`AppState::new`] created one.
    /// Hosts embedding the agent write their opcode and user entries here.
    pub fn shared_memory(&self) -> Option<Arc<SharedMemoryRuntime>> {
        self.inner.shared_memory.clone()
    }
}
