pub mod config;
pub mod http;
pub mod tags;

use std::sync::Arc;

use config::ServerConfig;

/// Shared application state passed to every HTTP handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: std::time::Instant::now(),
        }
    }
}
