use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::types::MrkdwnConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, MrkdwnError};

/// Configuration file names to look for, first match wins
const CONFIG_FILES: [&str; 4] = ["mrkdwn.toml", "mrkdwn.yml", "mrkdwn.yaml", "mrkdwn.json"];

/// Load configuration from an explicit file, or from the first default
/// config file found in `base_dir`. Falls back to defaults when none exists.
pub fn load_config<P: AsRef<Path>>(
    base_dir: P,
    config_file: Option<PathBuf>,
) -> BoxResult<MrkdwnConfig> {
    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(&base_dir),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            read_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            MrkdwnConfig::default()
        }
    };

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file
fn find_default_config_file<P: AsRef<Path>>(base_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Read and parse a configuration file based on its extension
fn read_config_file(config_path: &Path) -> BoxResult<MrkdwnConfig> {
    if !config_path.exists() {
        return Err(MrkdwnError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| MrkdwnError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_path),
        "json" => parse_json_config(&content, config_path),
        // Assume YAML otherwise
        "yml" | "yaml" | "" => parse_yaml_config(&content, config_path),
        other => Err(MrkdwnError::Config(format!(
            "Unsupported configuration file format: {}", other
        )).into()),
    }
}

fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<MrkdwnConfig> {
    // An empty YAML document deserializes to null, treat it as "all defaults"
    if content.trim().is_empty() {
        return Ok(MrkdwnConfig::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| MrkdwnError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

fn parse_toml_config(content: &str, path: &Path) -> BoxResult<MrkdwnConfig> {
    toml::from_str(content)
        .map_err(|e| MrkdwnError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

fn parse_json_config(content: &str, path: &Path) -> BoxResult<MrkdwnConfig> {
    serde_json::from_str(content)
        .map_err(|e| MrkdwnError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}
