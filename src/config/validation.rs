use log::warn;

use crate::config::MrkdwnConfig;
use crate::utils::error::{BoxResult, MrkdwnError};

/// Validate the configuration
pub fn validate_config(config: &MrkdwnConfig) -> BoxResult<()> {
    validate_toc_levels(config)?;
    validate_server(config)?;

    if let Some(layout) = &config.layout {
        if !layout.is_file() {
            return Err(MrkdwnError::Config(format!(
                "Layout file does not exist: {}", layout.display()
            )).into());
        }
    }

    Ok(())
}

/// Validate the table of contents level window
fn validate_toc_levels(config: &MrkdwnConfig) -> BoxResult<()> {
    let min = config.markdown.toc_min_level;
    let max = config.markdown.toc_max_level;

    if !(1..=6).contains(&min) || !(1..=6).contains(&max) {
        return Err(MrkdwnError::Config(format!(
            "TOC levels must be between 1 and 6, got {}..={}", min, max
        )).into());
    }

    if min > max {
        return Err(MrkdwnError::Config(format!(
            "toc_min_level ({}) is greater than toc_max_level ({})", min, max
        )).into());
    }

    Ok(())
}

fn validate_server(config: &MrkdwnConfig) -> BoxResult<()> {
    if config.server.port == 0 {
        return Err(MrkdwnError::Config("Server port must not be zero".to_string()).into());
    }

    if config.server.max_body_bytes == 0 {
        return Err(MrkdwnError::Config("max_body_bytes must not be zero".to_string()).into());
    }

    if config.server.request_timeout_secs == 0 {
        warn!("request_timeout_secs is 0, every request will time out immediately");
    }

    Ok(())
}
