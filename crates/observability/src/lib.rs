//! Observability infrastructure for the inventory service
//!
//! Structured logging via `tracing`, filtered by `RUST_LOG`.
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("inventory", LogFormat::Pretty)?;
//! ```

pub mod logging;

pub use logging::{init_logging, LogFormat};
