//! Launch-time session resolution.
//!
//! # Responsibilities
//! - Read the persisted identity and onboarding flag once at launch
//! - Decide the initial route for the screen layer
//! - Absorb every storage and parse failure into a safe route
//!
//! # Design Decisions
//! - This operation never returns an error: a broken store or a corrupt
//!   identity record degrades to the login route
//! - Read-only and idempotent; safe to call again after logout
//! - The onboarding flag is consulted only for students

use std::sync::Arc;

use crate::session::identity::{PersistedIdentity, Role};
use crate::session::route::RouteDecision;
use crate::storage::{keys, KeyValueStore};

/// Outcome of launch-time resolution: the parsed identity (if any) and the
/// route the screen layer should mount first.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSession {
    pub identity: Option<PersistedIdentity>,
    pub route: RouteDecision,
}

impl ResolvedSession {
    fn login() -> Self {
        Self {
            identity: None,
            route: RouteDecision::Login,
        }
    }
}

/// Computes the initial route from persisted state.
pub struct SessionResolver {
    store: Arc<dyn KeyValueStore>,
}

impl SessionResolver {
    /// Create a resolver reading from the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Decide which top-level experience to present.
    ///
    /// Infallible by contract: any failure along the way resolves to
    /// [`RouteDecision::Login`] with no identity.
    pub async fn resolve_initial_route(&self) -> ResolvedSession {
        let raw = match self.store.get(keys::USER).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No persisted identity; routing to login");
                return ResolvedSession::login();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Identity storage unreadable; routing to login");
                return ResolvedSession::login();
            }
        };

        let identity: PersistedIdentity = match serde_json::from_str(&raw) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "Persisted identity malformed; routing to login");
                return ResolvedSession::login();
            }
        };

        if identity.role == Role::Student {
            match self.store.get(keys::ONBOARDING).await {
                Ok(Some(flag)) if is_truthy(&flag) => {}
                Ok(_) => {
                    tracing::debug!("Student has not completed onboarding");
                    return ResolvedSession {
                        identity: Some(identity),
                        route: RouteDecision::Onboarding,
                    };
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Onboarding flag unreadable; routing to login");
                    return ResolvedSession::login();
                }
            }
        }

        let route = identity.role.home_route();
        tracing::debug!(role = %identity.role, route = %route, "Resolved launch route");
        ResolvedSession {
            identity: Some(identity),
            route,
        }
    }
}

/// The onboarding flow persists `"true"`; tolerate the common equivalents.
fn is_truthy(flag: &str) -> bool {
    matches!(flag.trim().to_ascii_lowercase().as_str(), "true" | "1")
}
