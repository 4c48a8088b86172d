pub mod renderer;
pub mod toc;
pub mod engine;
pub mod types;

pub use renderer::MarkdownRenderer;
#[cfg(test)]
pub use renderer::render_markdown;
pub use types::{RenderedMarkdown, TocItem};
