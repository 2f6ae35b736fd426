//! Backend data-access subsystem.
//!
//! # Data Flow
//! ```text
//! screen needs data
//!     → resilient.rs builds the call (base URL + path, JSON + auth headers)
//!     → send raced against the timeout
//!     → outcome.rs classifies: Success(data) | Failure(timeout/http/transport)
//!     → on Failure, request_with_fallback serves the static dataset
//!       and tags the payload with its source
//! ```
//!
//! # Design Decisions
//! - Every call is self-contained: no shared queue, no dedup, no cache, no
//!   cross-call ordering guarantees
//! - Failures are returned, not raised, so screens branch without try/catch
//!   scaffolding

pub mod outcome;
pub mod resilient;

pub use outcome::{DataSource, FailureReason, RequestOutcome, SourcedData};
pub use resilient::ResilientClient;
