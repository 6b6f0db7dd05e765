//! Explicit client configuration.
//!
//! The API base URL and the blog instance identifier are handed to the
//! client at construction; nothing is read from the process environment
//! here. Binaries decide where these values come from.

use std::time::Duration;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    instance_uuid: Uuid,
    /// Upper bound for a whole exchange. `None` lets a call run until the
    /// transport completes or fails.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_url: &str, instance_uuid: Uuid) -> Self {
        Self {
            api_url: api_url.strip_suffix('/').unwrap_or(api_url).to_string(),
            instance_uuid,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn instance_uuid(&self) -> Uuid {
        self.instance_uuid
    }
}
