use std::ops::RangeInclusive;
use comrak::nodes::AstNode;
use comrak::{Arena, Options, Plugins};
use log::{debug, error};

use crate::config::MarkdownConfig;
use crate::markdown::engine::{create_comrak_options, parse_document, tokenize};
use crate::markdown::renderer::heading_adapter::HeadingIdAdapter;
use crate::markdown::toc::index_headings_with_levels;
use crate::markdown::types::{RenderedMarkdown, Token, TocItem};

/// A parsed markdown document: the comrak AST plus its flattened tokens
pub struct Document<'a> {
    pub root: &'a AstNode<'a>,
    pub tokens: Vec<Token>,
}

/// Markdown renderer producing HTML with anchored headings and a table of contents.
///
/// Holds configuration only. Every call to [`MarkdownRenderer::render`] builds
/// its own arena and slug registry, so one renderer can be shared freely
/// between concurrent requests.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    config: MarkdownConfig,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        MarkdownRenderer::new(&MarkdownConfig::default())
    }
}

impl MarkdownRenderer {
    /// Create a new markdown renderer from config
    pub fn new(config: &MarkdownConfig) -> Self {
        MarkdownRenderer {
            config: config.clone(),
        }
    }

    fn options(&self) -> Options<'static> {
        create_comrak_options(&self.config)
    }

    fn toc_levels(&self) -> RangeInclusive<u8> {
        self.config.toc_min_level..=self.config.toc_max_level
    }

    /// Parse markdown into a document whose AST lives in `arena`
    pub fn parse<'a>(&self, arena: &'a Arena<AstNode<'a>>, source: &str) -> Document<'a> {
        let root = parse_document(arena, source, &self.options());
        let tokens = tokenize(root, source);
        Document { root, tokens }
    }

    /// Assign heading ids on the document's tokens and return its table of contents
    pub fn index_headings(&self, document: &mut Document<'_>) -> Vec<TocItem> {
        index_headings_with_levels(&mut document.tokens, self.toc_levels())
    }

    /// Serialize a document to HTML, using the heading ids found on its tokens
    pub fn serialize(&self, document: &Document<'_>) -> String {
        let adapter = HeadingIdAdapter::from_tokens(&document.tokens);
        let mut plugins = Plugins::default();
        plugins.render.heading_adapter = Some(&adapter);

        let mut output = Vec::new();
        if let Err(e) = comrak::format_html_with_plugins(document.root, &self.options(), &mut output, &plugins) {
            // Writing into a Vec does not fail, keep whatever was produced
            error!("Failed to format markdown as HTML: {}", e);
        }

        String::from_utf8_lossy(&output).into_owned()
    }

    /// Render markdown to HTML and its table of contents
    pub fn render(&self, source: &str) -> RenderedMarkdown {
        let arena = Arena::new();
        let mut document = self.parse(&arena, source);
        let toc_items = self.index_headings(&mut document);
        let content_html = self.serialize(&document);

        debug!(
            "Rendered {} bytes of markdown into {} bytes of HTML with {} TOC entries",
            source.len(),
            content_html.len(),
            toc_items.len()
        );

        RenderedMarkdown { content_html, toc_items }
    }
}

/// Render markdown content with the default configuration - convenience function
#[cfg(test)]
pub fn render_markdown(source: &str) -> RenderedMarkdown {
    MarkdownRenderer::default().render(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn heading_ids(html: &str) -> Vec<String> {
        let re = regex::Regex::new(r#"<h[1-6] id="([^"]+)">"#).unwrap();
        re.captures_iter(html).map(|caps| caps[1].to_string()).collect()
    }

    #[test]
    fn test_markdown_rendering() {
        let rendered = render_markdown("# Hello, World!\n\nThis is a **bold** statement.");

        assert!(rendered.content_html.contains("<h1 id=\"hello-world\">Hello, World!</h1>"));
        assert!(rendered.content_html.contains("<strong>bold</strong>"));
        assert!(rendered.toc_items.is_empty());
    }

    #[test]
    fn test_table_of_contents() {
        let markdown = "# Main Title\n\n## Section 1\n\nContent\n\n### Detail\n\n#### Too deep\n\n## Section 2\n\nMore content";
        let rendered = render_markdown(markdown);

        let toc: Vec<_> = rendered
            .toc_items
            .iter()
            .map(|item| (item.level, item.id.as_str(), item.text.as_str()))
            .collect();
        assert_eq!(
            toc,
            vec![
                (2, "section-1", "Section 1"),
                (3, "detail", "Detail"),
                (2, "section-2", "Section 2"),
            ]
        );
        assert!(rendered.content_html.contains("<h4 id=\"too-deep\">Too deep</h4>"));
    }

    #[test]
    fn test_repeated_headings_get_suffixes() {
        let rendered = render_markdown("## Notes\n\n## Notes\n\n## Notes\n");
        assert_eq!(heading_ids(&rendered.content_html), vec!["notes", "notes-2", "notes-3"]);
    }

    #[test]
    fn test_ids_are_distinct() {
        let markdown = "# A\n## A\n### a\n## A!\n## Notes\n## Notes 2\n## Notes\n## !!!\n## ???\n";
        let rendered = render_markdown(markdown);
        let ids = heading_ids(&rendered.content_html);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 9);
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_unicode_heading() {
        let rendered = render_markdown("## Café & Co.\n");
        assert_eq!(rendered.toc_items[0].id, "cafe-co");
        assert_eq!(rendered.toc_items[0].text, "Café & Co.");
        assert!(rendered.content_html.contains("Café &amp; Co."));
    }

    #[test]
    fn test_symbol_only_headings() {
        let rendered = render_markdown("## !!!\n\n## !!!\n");
        assert_eq!(heading_ids(&rendered.content_html), vec!["section", "section-2"]);
    }

    #[test]
    fn test_empty_heading_has_no_id() {
        let rendered = render_markdown("## \n\n## Next\n");
        assert!(rendered.content_html.contains("<h2></h2>"));
        assert!(rendered.content_html.contains("<h2 id=\"next\">Next</h2>"));
        assert_eq!(rendered.toc_items.len(), 1);
        assert_eq!(rendered.toc_items[0].id, "next");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let rendered = render_markdown("<script>alert(1)</script>\n\nHello <b onclick=\"x()\">there</b>\n");
        assert!(!rendered.content_html.contains("<script>"));
        assert!(!rendered.content_html.contains("<b onclick"));
        assert!(rendered.content_html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_autolink() {
        let rendered = render_markdown("Visit https://example.com today.\n");
        assert!(rendered.content_html.contains("<a href=\"https://example.com\">https://example.com</a>"));
    }

    #[test]
    fn test_autolink_www_and_email() {
        let rendered = render_markdown("Go to www.example.com or mail hello@example.com.\n");
        assert!(rendered.content_html.contains("<a href=\"http://www.example.com\">www.example.com</a>"));
        assert!(rendered.content_html.contains("<a href=\"mailto:hello@example.com\">hello@example.com</a>"));
    }

    #[test]
    fn test_autolink_can_be_disabled() {
        let config = MarkdownConfig {
            autolink: false,
            ..MarkdownConfig::default()
        };
        let rendered = MarkdownRenderer::new(&config).render("www.example.com hello@example.com\n");
        assert!(!rendered.content_html.contains("<a "));
    }

    #[test]
    fn test_heading_with_link_uses_its_source() {
        let rendered = render_markdown("## See [docs](https://x.io)\n");
        assert_eq!(rendered.toc_items[0].id, "see-docshttpsxio");
        assert_eq!(rendered.toc_items[0].text, "See [docs](https://x.io)");
        assert!(rendered.content_html.contains("<h2 id=\"see-docshttpsxio\">See <a href=\"https://x.io\">docs</a></h2>"));
    }

    #[test]
    fn test_image_only_heading_gets_an_id() {
        let rendered = render_markdown("## ![](logo.png)\n");
        assert_eq!(rendered.toc_items.len(), 1);
        assert_eq!(rendered.toc_items[0].id, "logopng");
        assert_eq!(rendered.toc_items[0].text, "![](logo.png)");
        assert!(rendered.content_html.contains("<h2 id=\"logopng\"><img src=\"logo.png\""));
    }

    #[test]
    fn test_heading_with_raw_html_matches_visible_text() {
        let rendered = render_markdown("## <b>Hi</b>\n");
        assert_eq!(rendered.toc_items[0].id, "bhib");
        assert_eq!(rendered.toc_items[0].text, "<b>Hi</b>");
        assert!(rendered.content_html.contains("<h2 id=\"bhib\">&lt;b&gt;Hi&lt;/b&gt;</h2>"));
    }

    #[test]
    fn test_typographic_substitution() {
        let rendered = render_markdown("\"Quoted\" -- dash... done\n");
        assert!(rendered.content_html.contains('“'));
        assert!(rendered.content_html.contains('”'));
        assert!(rendered.content_html.contains('–'));
        assert!(rendered.content_html.contains('…'));
    }

    #[test]
    fn test_typographer_can_be_disabled() {
        let config = MarkdownConfig {
            typographer: false,
            ..MarkdownConfig::default()
        };
        let rendered = MarkdownRenderer::new(&config).render("\"plain\"\n");
        assert!(rendered.content_html.contains("&quot;plain&quot;"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let markdown = "# T\n## Notes\n## Notes\n### Café\n";
        let renderer = MarkdownRenderer::default();
        assert_eq!(renderer.render(markdown), renderer.render(markdown));
    }

    #[test]
    fn test_degenerate_inputs() {
        for source in ["", "   \n\t  ", "\u{0000}\u{0001}\u{001b}[31m", "#", "######", "[x]: \n"] {
            let rendered = render_markdown(source);
            assert!(rendered.toc_items.is_empty(), "{:?}", source);
        }
    }

    #[test]
    fn test_parse_then_serialize_without_index() {
        let renderer = MarkdownRenderer::default();
        let arena = Arena::new();
        let document = renderer.parse(&arena, "## Plain\n");
        assert_eq!(renderer.serialize(&document), "<h2>Plain</h2>\n");
    }
}
