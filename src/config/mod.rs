//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → passed explicitly into SessionResolver / ResilientClient
//! ```
//!
//! # Design Decisions
//! - Config is an explicit value handed to constructors, never ambient state,
//!   so tests inject fixtures without touching globals
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ApiConfig, ClientConfig, ObservabilityConfig, ProbeConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
