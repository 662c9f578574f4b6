//! HTTP server configuration.

use serde::{Deserialize, Serialize};

use super::default_true;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            log_format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// Socket address string suitable for a TCP bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the server configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `log_format` is not `"text"` or `"json"`.
    pub fn validate(&self) -> Result<(), String> {
        match self.log_format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(format!(
                "server.log_format must be \"text\" or \"json\", got \"{other}\""
            )),
        }
    }
}
