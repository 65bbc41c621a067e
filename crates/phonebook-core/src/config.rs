//! Configuration types for the phonebook service
//!
//! This module defines the validated runtime configuration. The daemon
//! populates it from environment variables; embedders can construct it
//! directly.

use serde::{Deserialize, Serialize};

/// Default listen address (port 0 binds an ephemeral port)
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4000";

/// Default base URL of the remote directory
pub const DEFAULT_DIRECTORY_URL: &str = "http://localhost:3000";

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Socket address the HTTP listener binds to
    pub bind_addr: String,

    /// Base URL of the remote directory (the `/persons` path is appended)
    pub directory_url: String,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl ServiceConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            log_level: "info".to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(crate::Error::config(format!(
                "bind address is not a valid socket address: {}",
                self.bind_addr
            )));
        }

        if self.directory_url.is_empty() {
            return Err(crate::Error::config("directory URL cannot be empty"));
        }

        if !self.directory_url.starts_with("http://") && !self.directory_url.starts_with("https://")
        {
            return Err(crate::Error::config(format!(
                "directory URL must use HTTP or HTTPS scheme, got: {}",
                self.directory_url
            )));
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(crate::Error::config(format!(
                    "log level '{}' is not valid (trace, debug, info, warn, error)",
                    other
                )));
            }
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}
