//! Client Configuration
//!
//! API location and status message lifetimes.

use std::time::Duration;

/// How long most status messages stay visible
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);
/// Successful removals clear sooner
pub const REMOVAL_SUCCESS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    pub message_ttl: Duration,
    pub removal_success_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_ttl: MESSAGE_TTL,
            removal_success_ttl: REMOVAL_SUCCESS_TTL,
        }
    }
}

impl ClientConfig {
    /// Config baked in at build time via `ACTIVITIES_API_BASE`
    pub fn from_env() -> Self {
        Self::with_api_base(option_env!("ACTIVITIES_API_BASE").unwrap_or(""))
    }

    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }
}
