use log::{error, info};

use crate::cli::types::Commands;
use crate::config::MrkdwnConfig;
use crate::server;
use crate::server::config::ServerConfig;

/// Handle the serve command. `command` is `None` when no subcommand was given.
pub async fn handle_serve_command(command: Option<&Commands>, config: &MrkdwnConfig) {
    let mut server_config = ServerConfig::from_settings(&config.server);

    // Command line flags take precedence over the config file
    if let Some(Commands::Serve { host, port }) = command {
        if let Some(host) = host {
            server_config = server_config.with_address(host);
        }
        if let Some(port) = port {
            server_config = server_config.with_port(*port);
        }
    }

    info!("Serving markdown on {}", server_config.address_string());
    if let Err(e) = server::serve(&server_config, config).await {
        error!("Server error: {}", e);
    }
}
