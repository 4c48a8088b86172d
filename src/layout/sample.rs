/// Document rendered when a request carries no markdown of its own
pub const SAMPLE_MARKDOWN: &str = include_str!("sample.md");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render_markdown;

    #[test]
    fn test_sample_contents() {
        let rendered = render_markdown(SAMPLE_MARKDOWN);
        let toc: Vec<_> = rendered
            .toc_items
            .iter()
            .map(|item| (item.level, item.id.as_str()))
            .collect();

        assert_eq!(
            toc,
            vec![(2, "why-this-matters"), (2, "a-useful-mental-model"), (3, "small-wins")]
        );
        assert!(rendered.content_html.contains("<h1 id=\"how-a-screen-works\">"));
        assert!(rendered.content_html.contains("<blockquote>"));
    }
}
