use std::fs;
use liquid::{Parser, Template};
use log::debug;
use serde::Serialize;

use crate::config::MrkdwnConfig;
use crate::markdown::{RenderedMarkdown, TocItem};
use crate::utils::error::{BoxResult, MrkdwnError};

/// Built-in page shell: composer form, contents sidebar, article and scroll-spy script
const DEFAULT_LAYOUT: &str = include_str!("page.liquid");

/// Variables handed to the page layout
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    title: &'a str,
    toc_title: &'a str,
    source: &'a str,
    content: &'a str,
    toc_items: &'a [TocItem],
}

/// Renders a full HTML page around rendered markdown
pub struct PageRenderer {
    template: Template,
    title: String,
    toc_title: String,
}

impl PageRenderer {
    /// Create a page renderer from config, using the configured layout file if any
    pub fn new(config: &MrkdwnConfig) -> BoxResult<Self> {
        let layout = match &config.layout {
            Some(path) => {
                debug!("Using layout: {}", path.display());
                fs::read_to_string(path).map_err(|e| MrkdwnError::Template(format!(
                    "Failed to read layout {}: {}", path.display(), e
                )))?
            }
            None => DEFAULT_LAYOUT.to_string(),
        };

        Self::from_layout(&layout, &config.title, &config.toc_title)
    }

    /// Create a page renderer from liquid layout source
    pub fn from_layout(layout: &str, title: &str, toc_title: &str) -> BoxResult<Self> {
        let parser: Parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| MrkdwnError::Template(format!("Failed to create Liquid parser: {}", e)))?;

        let template = parser
            .parse(layout)
            .map_err(|e| MrkdwnError::Template(format!("Failed to parse layout: {}", e)))?;

        Ok(PageRenderer {
            template,
            title: title.to_string(),
            toc_title: toc_title.to_string(),
        })
    }

    /// Render the page for `source` and its rendered form
    pub fn render(&self, source: &str, rendered: &RenderedMarkdown) -> BoxResult<String> {
        let context = PageContext {
            title: &self.title,
            toc_title: &self.toc_title,
            source,
            content: &rendered.content_html,
            toc_items: &rendered.toc_items,
        };

        let globals = liquid::to_object(&context)
            .map_err(|e| MrkdwnError::Template(format!("Failed to build page variables: {}", e)))?;

        let page = self
            .template
            .render(&globals)
            .map_err(|e| MrkdwnError::Template(format!("Failed to render layout: {}", e)))?;

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render_markdown;

    fn default_renderer() -> PageRenderer {
        PageRenderer::new(&MrkdwnConfig::default()).unwrap()
    }

    #[test]
    fn test_page_shell() {
        let source = "# Title\n\n## First\n\n### Second\n";
        let page = default_renderer().render(source, &render_markdown(source)).unwrap();

        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains("<title>mrkdwn</title>"));
        assert!(page.contains("<article><h1 id=\"title\">Title</h1>"));
        assert!(page.contains(
            "<li class=\"toc-item\" data-level=\"2\"><a class=\"toc-link\" href=\"#first\">First</a></li>"
        ));
        assert!(page.contains("data-level=\"3\""));
        assert!(page.contains("<p class=\"toc-title\">Contents</p>"));
    }

    #[test]
    fn test_no_toc_without_entries() {
        let source = "# Only a title\n\nBody.";
        let page = default_renderer().render(source, &render_markdown(source)).unwrap();
        assert!(!page.contains("<aside class=\"toc\">"));
    }

    #[test]
    fn test_source_and_toc_text_are_escaped() {
        let source = "## <b>Bold</b> & \"quoted\"\n\n</textarea><script>x()</script>";
        let page = default_renderer().render(source, &render_markdown(source)).unwrap();

        assert!(!page.contains("</textarea><script>"));
        assert!(page.contains("&lt;/textarea&gt;&lt;script&gt;"));
        assert!(!page.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_custom_layout() {
        let renderer = PageRenderer::from_layout(
            "<h1>{{ title }}</h1>{% for item in toc_items %}[{{ item.id }}]{% endfor %}{{ content }}",
            "Docs",
            "Contents",
        )
        .unwrap();
        let source = "## One\n\n## Two\n";
        let page = renderer.render(source, &render_markdown(source)).unwrap();
        assert!(page.starts_with("<h1>Docs</h1>[one][two]<h2 id=\"one\">"));
    }

    #[test]
    fn test_invalid_layout_is_an_error() {
        assert!(PageRenderer::from_layout("{% if %}", "t", "c").is_err());
    }
}
