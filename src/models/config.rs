//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Base URL of the remote booking service.
    pub booking_api_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// How long a demo page notification stays on screen.
    pub notification_ttl_secs: u64,
    pub bridge_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
