//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client
//! core. All types derive Serde traits for deserialization from config files,
//! and every section has a usable default so screens and tests can construct
//! a config without a file on disk.

use serde::{Deserialize, Serialize};

/// Root configuration for the client core.
///
/// Passed explicitly into [`crate::api::ResilientClient`]; nothing in the
/// crate reads configuration from ambient global state.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend API settings (base URL).
    pub api: ApiConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Reachability probe settings.
    pub probe: ProbeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are appended to (e.g., "https://api.example.com/api").
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// Timeout configuration for backend calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Data request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Reachability probe timeout in seconds. Shorter than the data timeout
    /// so launch screens learn about a dead backend quickly.
    pub probe_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 20,
            probe_secs: 8,
        }
    }
}

/// Reachability probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Path to probe, relative to the base URL.
    pub path: String,

    /// Number of retries after the first failed attempt.
    pub max_retries: u32,

    /// Delay between probe attempts in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            max_retries: 1,
            retry_delay_ms: 250,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
