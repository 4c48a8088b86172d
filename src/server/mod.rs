pub mod config;
pub mod handlers;
pub mod app;
pub mod core;
pub mod middleware;

// Re-export key components for public API
pub use self::core::serve;
