//! Listener configuration

use crate::error::{Result, ServerError};
use std::net::SocketAddr;

/// Port used when none is configured
pub const DEFAULT_HTTP_PORT: u16 = 10000;

/// Address the HTTP listener binds to.
///
/// A port of 0 asks the OS for an ephemeral port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    pub http_port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, http_port: u16) -> Self {
        Self {
            host: host.into(),
            http_port,
        }
    }

    /// Parse host and port into a socket address
    pub fn http_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.http_port)
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.http_port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", DEFAULT_HTTP_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.http_port, 10000);
    }

    #[test]
    fn test_http_addr() {
        let addr = ServerConfig::new("127.0.0.1", 8080).http_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());

        let err = ServerConfig::new("not a host", 8080).http_addr().unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress(_)));
    }
}
