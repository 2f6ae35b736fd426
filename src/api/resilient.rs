//! Resilient backend client.
//!
//! # Responsibilities
//! - Attach auth and content headers to every backend call
//! - Bound every call with a timeout
//! - Classify failures into values instead of raising them
//! - Probe backend reachability before optimistic UI decisions
//! - Serve static fallback data when the live call fails
//!
//! # Design Decisions
//! - The timeout races the send; when the deadline wins, the losing future is
//!   dropped, which tears down the in-flight connection
//! - Data calls are never retried here — only the probe retries, once by
//!   default; retrying data calls is the caller's decision
//! - Stateless across calls: the bearer token is re-read from storage on
//!   every request, so login/logout take effect immediately

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use uuid::Uuid;

use crate::api::outcome::{DataSource, FailureReason, RequestOutcome, SourcedData};
use crate::config::ClientConfig;
use crate::fallback::FallbackDataset;
use crate::storage::{keys, KeyValueStore};

/// Timeout-bounded, auth-attaching HTTP client with offline fallback.
///
/// Construction is explicit: configuration, token store, and (optionally) the
/// fallback table are injected, never read from ambient globals.
pub struct ResilientClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn KeyValueStore>,
    fallback: FallbackDataset,
}

impl ResilientClient {
    /// Create a client with the built-in fallback dataset.
    pub fn new(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_fallback(config, store, FallbackDataset::builtin())
    }

    /// Create a client with a custom fallback dataset.
    pub fn with_fallback(
        config: ClientConfig,
        store: Arc<dyn KeyValueStore>,
        fallback: FallbackDataset,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            store,
            fallback,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one authenticated, timeout-bounded call.
    ///
    /// Never returns an error: every failure mode is classified into a
    /// [`RequestOutcome::Failure`]. Absence of a stored token is not a
    /// failure — the call simply goes out unauthenticated.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> RequestOutcome {
        let url = self.endpoint_url(endpoint);
        let request_id = Uuid::new_v4();
        let bound = Duration::from_secs(self.config.timeouts.request_secs);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header("x-request-id", request_id.to_string());

        match self.store.get(keys::TOKEN).await {
            Ok(Some(token)) => match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => builder = builder.header(AUTHORIZATION, value),
                Err(e) => {
                    tracing::warn!(
                        request_id = %request_id,
                        error = %e,
                        "Stored token unusable as header; sending unauthenticated"
                    );
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    error = %e,
                    "Token read failed; sending unauthenticated"
                );
            }
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(request_id = %request_id, method = %method, url = %url, "Dispatching request");

        match time::timeout(bound, builder.send()).await {
            Ok(Ok(response)) => {
                let status = response.status();
                if !status.is_success() {
                    tracing::warn!(request_id = %request_id, status = %status, "Backend returned error status");
                    return RequestOutcome::Failure {
                        reason: FailureReason::Http(status),
                    };
                }
                match read_json_body(response).await {
                    Ok(data) => {
                        tracing::debug!(request_id = %request_id, status = %status, "Request succeeded");
                        RequestOutcome::Success { data }
                    }
                    Err(e) => {
                        tracing::warn!(request_id = %request_id, error = %e, "Success response with unreadable body");
                        RequestOutcome::Failure {
                            reason: FailureReason::Transport(e),
                        }
                    }
                }
            }
            Ok(Err(e)) => {
                // reqwest reports its own connect-level timeouts as errors;
                // fold them into the timeout reason for a single taxonomy.
                let reason = if e.is_timeout() {
                    FailureReason::Timeout(bound)
                } else {
                    FailureReason::Transport(e.to_string())
                };
                tracing::warn!(request_id = %request_id, error = %e, "Request failed in transport");
                RequestOutcome::Failure { reason }
            }
            Err(_) => {
                tracing::warn!(request_id = %request_id, timeout = ?bound, "Request timed out");
                RequestOutcome::Failure {
                    reason: FailureReason::Timeout(bound),
                }
            }
        }
    }

    /// GET `endpoint`.
    pub async fn get(&self, endpoint: &str) -> RequestOutcome {
        self.request(Method::GET, endpoint, None).await
    }

    /// POST `body` to `endpoint`.
    pub async fn post(&self, endpoint: &str, body: &Value) -> RequestOutcome {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// PUT `body` to `endpoint`.
    pub async fn put(&self, endpoint: &str, body: &Value) -> RequestOutcome {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// DELETE `endpoint`.
    pub async fn delete(&self, endpoint: &str) -> RequestOutcome {
        self.request(Method::DELETE, endpoint, None).await
    }

    /// Check whether the backend is reachable at all.
    ///
    /// Any HTTP status below 500 counts as reachable — the server process is
    /// up even if the probed route 404s. Timeouts, transport errors, and 5xx
    /// answers are retried (once by default) before giving up. Never errors.
    pub async fn probe_connectivity(&self) -> bool {
        let url = self.endpoint_url(&self.config.probe.path);
        let bound = Duration::from_secs(self.config.timeouts.probe_secs);
        let attempts = self.config.probe.max_retries.saturating_add(1);

        for attempt in 1..=attempts {
            match time::timeout(bound, self.http.get(&url).send()).await {
                Ok(Ok(response)) => {
                    let status = response.status();
                    if status.as_u16() < 500 {
                        tracing::debug!(attempt, status = %status, "Backend reachable");
                        return true;
                    }
                    tracing::warn!(attempt, status = %status, "Probe hit server error");
                }
                Ok(Err(e)) => {
                    tracing::warn!(attempt, error = %e, "Probe failed: connection error");
                }
                Err(_) => {
                    tracing::warn!(attempt, timeout = ?bound, "Probe failed: timeout");
                }
            }

            if attempt < attempts {
                time::sleep(Duration::from_millis(self.config.probe.retry_delay_ms)).await;
            }
        }

        tracing::warn!(url = %url, attempts, "Backend unreachable");
        false
    }

    /// Static example payload for `resource`; an empty collection for
    /// resources the fallback table does not know.
    pub fn fallback_data(&self, resource: &str) -> Value {
        self.fallback.get(resource)
    }

    /// GET `endpoint`, serving the fallback payload for `resource` when the
    /// live call fails.
    ///
    /// This is the offline/demo policy as one composed operation: screens
    /// render `data` either way and may show a subdued indicator when
    /// `source` is [`DataSource::Fallback`].
    pub async fn request_with_fallback(&self, endpoint: &str, resource: &str) -> SourcedData {
        match self.get(endpoint).await {
            RequestOutcome::Success { data } => SourcedData {
                source: DataSource::Live,
                data,
            },
            RequestOutcome::Failure { reason } => {
                tracing::warn!(
                    endpoint,
                    resource,
                    reason = %reason,
                    "Live request failed; serving fallback data"
                );
                SourcedData {
                    source: DataSource::Fallback,
                    data: self.fallback.get(resource),
                }
            }
        }
    }

    /// Join an endpoint path onto the configured base URL.
    ///
    /// Endpoints are plain relative paths; `/` and the empty string address
    /// the base itself.
    fn endpoint_url(&self, endpoint: &str) -> String {
        let base = self.config.api.base_url.trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        if path.is_empty() {
            return base.to_string();
        }
        format!("{base}/{path}")
    }
}

/// A success body is opaque JSON; an empty body (204-style) maps to `null`.
async fn read_json_body(response: reqwest::Response) -> Result<Value, String> {
    let text = response.text().await.map_err(|e| e.to_string())?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| format!("invalid JSON body: {e}"))
}
