//! Server infrastructure for the inventory service
//!
//! The HTTP listener implements the [`Server`] trait; [`ServerExt`] adds
//! `spawn()` and `run_with_ctrl_c()`. Shutdown is coordinated with a
//! `CancellationToken` from `tokio_util`.
//!
//! ```ignore
//! use server::{HttpServer, ServerConfig, ServerExt};
//!
//! let server = HttpServer::new(ServerConfig::new("0.0.0.0", 10000), router);
//! server.run_with_ctrl_c().await?;
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod shutdown;
pub mod traits;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use http::HttpServer;
pub use shutdown::ShutdownController;
pub use traits::{Server, ServerExt};
