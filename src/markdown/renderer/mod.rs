mod heading_adapter;
mod markdown_renderer;

pub use markdown_renderer::MarkdownRenderer;
#[cfg(test)]
pub use markdown_renderer::render_markdown;
