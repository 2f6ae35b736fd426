//! Durable key-value storage boundary.
//!
//! # Data Flow
//! ```text
//! auth / onboarding flows (external)
//!     → set("user" | "hasCompletedOnboarding" | "token")
//!
//! SessionResolver   → get("user"), get("hasCompletedOnboarding")
//! ResilientClient   → get("token") on every request
//! ```
//!
//! # Design Decisions
//! - The core only ever reads the three well-known keys; writes belong to the
//!   auth and onboarding flows, which are outside this crate
//! - Values are opaque strings; the identity record is JSON-encoded by its
//!   writer, and parse failures are the reader's problem to absorb
//! - Trait object (`Arc<dyn KeyValueStore>`) so screens, tests, and the CLI
//!   can swap backing stores freely

use async_trait::async_trait;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage keys shared with the (external) auth and onboarding flows.
pub mod keys {
    /// JSON-serialized identity of the logged-in user.
    pub const USER: &str = "user";

    /// `"true"` once the student onboarding flow has completed.
    pub const ONBOARDING: &str = "hasCompletedOnboarding";

    /// Opaque bearer token attached to authenticated requests.
    pub const TOKEN: &str = "token";
}

/// Errors that can occur at the storage boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file or device error.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored state exists but cannot be encoded/decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing store cannot be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable key-value storage of string values.
///
/// Models the device-local storage the mobile client persists session state
/// in. `get` distinguishes "key absent" (`Ok(None)`) from "storage broken"
/// (`Err`) because the two degrade differently at bootstrap.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key` if present. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
