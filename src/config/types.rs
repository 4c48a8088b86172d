use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;

/// Markdown rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Turn bare URLs and e-mail addresses into links
    #[serde(default = "defaults::default_true")]
    pub autolink: bool,

    /// Curly quotes, dashes and ellipses
    #[serde(default = "defaults::default_true")]
    pub typographer: bool,

    /// Shallowest heading level listed in the table of contents
    #[serde(default = "defaults::default_toc_min_level")]
    pub toc_min_level: u8,

    /// Deepest heading level listed in the table of contents
    #[serde(default = "defaults::default_toc_max_level")]
    pub toc_max_level: u8,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        MarkdownConfig {
            autolink: true,
            typographer: true,
            toc_min_level: defaults::default_toc_min_level(),
            toc_max_level: defaults::default_toc_max_level(),
        }
    }
}

/// HTTP settings as they appear in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind to
    #[serde(default = "defaults::default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "defaults::default_port")]
    pub port: u16,

    /// Largest accepted request body in bytes
    #[serde(default = "defaults::default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: defaults::default_host(),
            port: defaults::default_port(),
            max_body_bytes: defaults::default_max_body_bytes(),
            request_timeout_secs: defaults::default_request_timeout_secs(),
        }
    }
}

/// Top-level mrkdwn configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MrkdwnConfig {
    /// Page title
    #[serde(default = "defaults::default_title")]
    pub title: String,

    /// Heading shown above the table of contents
    #[serde(default = "defaults::default_toc_title")]
    pub toc_title: String,

    /// Custom liquid page layout replacing the built-in one
    #[serde(default)]
    pub layout: Option<PathBuf>,

    #[serde(default)]
    pub markdown: MarkdownConfig,

    #[serde(default)]
    pub server: ServerSettings,
}

impl Default for MrkdwnConfig {
    fn default() -> Self {
        MrkdwnConfig {
            title: defaults::default_title(),
            toc_title: defaults::default_toc_title(),
            layout: None,
            markdown: MarkdownConfig::default(),
            server: ServerSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MrkdwnConfig::default();
        assert_eq!(config.title, "mrkdwn");
        assert_eq!(config.toc_title, "Contents");
        assert_eq!(config.markdown.toc_min_level, 2);
        assert_eq!(config.markdown.toc_max_level, 3);
        assert!(config.markdown.autolink);
        assert!(config.markdown.typographer);
        assert_eq!(config.server.port, 8787);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MrkdwnConfig = toml::from_str("title = \"Notes\"\n[server]\nport = 9000\n").unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.markdown.toc_max_level, 3);
    }
}
