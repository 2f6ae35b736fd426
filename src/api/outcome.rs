//! Request outcome and data-source types.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Why a backend call produced no usable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// The timeout elapsed before the backend answered.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {0}")]
    Http(StatusCode),

    /// No usable HTTP response: DNS failure, refused connection, reset, or an
    /// unreadable body.
    #[error("transport error: {0}")]
    Transport(String),
}

impl FailureReason {
    /// Status code for HTTP-level failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FailureReason::Http(status) => Some(*status),
            _ => None,
        }
    }

    /// Whether this failure was the timeout losing the race.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FailureReason::Timeout(_))
    }
}

/// Tagged result of one backend call.
///
/// Failures are ordinary values rather than raised errors so callers can
/// branch to fallback data without error-handling boilerplate. Each call's
/// outcome stands alone; nothing is retried or cached at this layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// 2xx response with (possibly null) JSON payload.
    Success { data: Value },
    /// Anything else, classified.
    Failure { reason: FailureReason },
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success { .. })
    }

    /// Convert into a `Result` for callers that prefer `?`-style handling.
    pub fn into_result(self) -> Result<Value, FailureReason> {
        match self {
            RequestOutcome::Success { data } => Ok(data),
            RequestOutcome::Failure { reason } => Err(reason),
        }
    }
}

/// Where a composed fetch got its payload from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Fresh from the backend.
    Live,
    /// Served from the static offline dataset.
    Fallback,
}

/// Payload plus provenance, returned by
/// [`crate::api::ResilientClient::request_with_fallback`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcedData {
    pub source: DataSource,
    pub data: Value,
}

impl SourcedData {
    /// True when the payload came from the live backend.
    pub fn is_live(&self) -> bool {
        self.source == DataSource::Live
    }
}
