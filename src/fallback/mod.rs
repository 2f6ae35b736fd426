//! Offline/demo fallback data subsystem.
//!
//! When the backend is unreachable, screens keep rendering from this static
//! dataset instead of showing an error screen. Payloads mirror the shape of
//! live API responses; the table is fixed for the process lifetime.

pub mod dataset;

pub use dataset::{resources, FallbackDataset};
