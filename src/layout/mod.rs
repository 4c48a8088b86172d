mod renderer;
mod sample;

pub use renderer::PageRenderer;
pub use sample::SAMPLE_MARKDOWN;
