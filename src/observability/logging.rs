//! Structured logging initialization.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries
//! - Respect `RUST_LOG` when set, fall back to a sensible default otherwise
//!
//! # Design Decisions
//! - Library code only emits events; installing the global subscriber is the
//!   binary's job, so embedding applications keep control of their logging

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `default_filter` is an EnvFilter directive string applied when `RUST_LOG`
/// is unset. Call once, from a binary.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
