pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use crate::config;
use std::path::PathBuf;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = match config::load_config(PathBuf::from("."), cli.config.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return;
        }
    };

    match &cli.command {
        Some(command @ types::Commands::Render { .. }) => {
            commands::handle_render_command(command, &config).await;
        }
        // Serving is the default when no subcommand is given
        command => {
            commands::handle_serve_command(command.as_ref(), &config).await;
        }
    }
}
