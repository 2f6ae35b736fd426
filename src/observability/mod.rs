//! Observability subsystem.
//!
//! All subsystems emit structured `tracing` events; request logs carry the
//! generated request ID so one call can be followed across the degrade
//! points. Subscriber installation lives here and is invoked by binaries.

pub mod logging;
