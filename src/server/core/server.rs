use log::{error, info};
use std::net::SocketAddr;
use tokio::signal;

use crate::config::MrkdwnConfig;
use crate::server::app::{create_app, AppState};
use crate::server::config::ServerConfig;
use crate::utils::error::{BoxResult, MrkdwnError};

/// Start the rendering server and run until Ctrl+C
pub async fn serve(server_config: &ServerConfig, config: &MrkdwnConfig) -> BoxResult<()> {
    let address = server_config.address_string();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| MrkdwnError::Server(format!("Invalid bind address {}: {}", address, e)))?;

    let state = AppState::from_config(config)?;
    let app = create_app(state, server_config);

    info!("Starting server at {}", server_config.url());
    let server = axum_server::bind(addr).serve(app.into_make_service());

    print_server_banner(server_config, config);

    // Run the server with graceful shutdown
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(MrkdwnError::Server(e.to_string()).into());
            }
            info!("Server stopped");
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

/// Print a banner with server information
fn print_server_banner(server_config: &ServerConfig, config: &MrkdwnConfig) {
    println!("\n{}", "-".repeat(60));
    println!(" {} server", config.title);
    println!(" - URL: {}", server_config.url());
    println!(" - Health: {}health", server_config.url());
    println!(
        " - TOC levels: h{}-h{}",
        config.markdown.toc_min_level, config.markdown.toc_max_level
    );
    println!(" - Max body: {} bytes", server_config.max_body_bytes);
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
