//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base URL is an absolute http(s) URL
//! - Validate value ranges (timeouts > 0, probe retries bounded)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system

use crate::config::schema::ClientConfig;
use thiserror::Error;
use url::Url;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Base URL is missing, relative, or not http(s).
    #[error("invalid base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    /// A timeout field is zero.
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    /// Probe path must be relative to the base URL.
    #[error("probe path '{0}' must start with '/'")]
    BadProbePath(String),

    /// The probe is a launch-time check; unbounded retries would stall launch.
    #[error("probe max_retries {0} exceeds limit of {1}")]
    TooManyProbeRetries(u32, u32),
}

const MAX_PROBE_RETRIES: u32 = 5;

/// Validate a configuration, collecting every semantic error.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidBaseUrl(
            config.api.base_url.clone(),
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl(
            config.api.base_url.clone(),
            e.to_string(),
        )),
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }
    if config.timeouts.probe_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.probe_secs"));
    }

    if !config.probe.path.starts_with('/') {
        errors.push(ValidationError::BadProbePath(config.probe.path.clone()));
    }
    if config.probe.max_retries > MAX_PROBE_RETRIES {
        errors.push(ValidationError::TooManyProbeRetries(
            config.probe.max_retries,
            MAX_PROBE_RETRIES,
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
