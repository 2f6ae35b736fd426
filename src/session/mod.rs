//! Session bootstrap subsystem.
//!
//! # Data Flow
//! ```text
//! launch
//!     → resolver.rs reads "user" from storage
//!         absent / unreadable / malformed → Login
//!     → identity.rs parses the record (role required, rest optional)
//!     → student? check "hasCompletedOnboarding" → Onboarding if not done
//!     → route.rs maps role → home destination (unknown role → StudentHome)
//! ```
//!
//! # Design Decisions
//! - Every failure degrades to a route; the screen layer never sees an error
//!   from this subsystem
//! - Role is a closed enum with an explicit catch-all, so the unknown-role
//!   fallback is a visible, tested branch

pub mod identity;
pub mod resolver;
pub mod route;

pub use identity::{PersistedIdentity, Role};
pub use resolver::{ResolvedSession, SessionResolver};
pub use route::RouteDecision;
