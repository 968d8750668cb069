//! Application State
//!
//! Shared state accessible by all API handlers.

use crate::config::ApiConfig;
use crate::dashboard::Dashboard;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The dashboard controller. Every mutation happens under one write lock.
    pub dashboard: Arc<RwLock<Dashboard>>,
    /// API configuration, reported back by `/health`
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dashboard: Dashboard, config: ApiConfig) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
