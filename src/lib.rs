//! Bootstrap and resilient data-access core for the campus marketplace client.

pub mod api;
pub mod config;
pub mod fallback;
pub mod observability;
pub mod session;
pub mod storage;

pub use api::{RequestOutcome, ResilientClient};
pub use config::ClientConfig;
pub use fallback::FallbackDataset;
pub use session::{RouteDecision, SessionResolver};
pub use storage::KeyValueStore;
