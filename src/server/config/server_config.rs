use std::time::Duration;

use crate::config::ServerSettings;

/// Runtime server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    /// Port to listen on (e.g., 8787)
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// Time allowed for a single request
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig::from_settings(&ServerSettings::default())
    }
}

impl ServerConfig {
    /// Create a server configuration from the config file section
    pub fn from_settings(settings: &ServerSettings) -> Self {
        ServerConfig {
            address: settings.host.clone(),
            port: settings.port,
            max_body_bytes: settings.max_body_bytes,
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
        }
    }

    /// Override the bind address
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    /// Override the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Get the full address string (e.g., "127.0.0.1:8787")
    pub fn address_string(&self) -> String {
        if self.address.contains(':') {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }

    /// Get the full URL (e.g., "http://localhost:8787/")
    pub fn url(&self) -> String {
        let address = if self.address == "127.0.0.1" {
            "localhost".to_string()
        } else if self.address.contains(':') {
            format!("[{}]", self.address)
        } else {
            self.address.clone()
        };

        format!("http://{}:{}/", address, self.port)
    }
}
