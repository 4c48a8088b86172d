mod health;
mod render;

pub use health::{health, handle_not_found, redirect_to_root};
pub use render::{render_from_body, render_from_query};
