use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::MrkdwnConfig;
use crate::layout::PageRenderer;
use crate::markdown::MarkdownRenderer;
use crate::server::config::ServerConfig;
use crate::server::handlers::{
    handle_not_found, health, redirect_to_root, render_from_body, render_from_query,
};
use crate::server::middleware::{with_security_headers, SecurityHeaders};
use crate::utils::error::BoxResult;

/// State shared with handlers. Both renderers are read-only, so requests
/// never contend on it.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<MarkdownRenderer>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    /// Build the shared renderers from config
    pub fn from_config(config: &MrkdwnConfig) -> BoxResult<Self> {
        Ok(AppState {
            renderer: Arc::new(MarkdownRenderer::new(&config.markdown)),
            pages: Arc::new(PageRenderer::new(config)?),
        })
    }
}

/// Build the router with all routes and middleware
pub fn create_app(state: AppState, server_config: &ServerConfig) -> Router {
    // Rendered pages get the strict page headers
    let pages = with_security_headers(
        Router::new().route(
            "/",
            get(render_from_query)
                .post(render_from_body)
                .fallback(handle_not_found),
        ),
        &SecurityHeaders::default(),
    );

    Router::new()
        .merge(pages)
        .route("/health", get(health).fallback(handle_not_found))
        .route("/render", any(redirect_to_root))
        .fallback(handle_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(server_config.max_body_bytes))
        .layer(timeout_layer(server_config.request_timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}

/// Requests running longer than `timeout` are answered with 408
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
