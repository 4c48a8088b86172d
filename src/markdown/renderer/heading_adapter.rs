use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use comrak::adapters::{HeadingAdapter, HeadingMeta};
use comrak::nodes::Sourcepos;

use crate::markdown::types::{Token, TokenKind};

/// Writes heading tags with the ids assigned by the heading indexer.
///
/// comrak visits headings in document order, which is also the order of the
/// heading-open tokens, so the N-th call to `enter` takes the N-th id.
pub struct HeadingIdAdapter {
    ids: Vec<Option<String>>,
    cursor: AtomicUsize,
}

impl HeadingIdAdapter {
    pub fn new(ids: Vec<Option<String>>) -> Self {
        HeadingIdAdapter {
            ids,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Collect the `id` attribute of every heading-open token, in order
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let ids = tokens
            .iter()
            .filter(|token| token.kind == TokenKind::HeadingOpen)
            .map(|token| token.attr("id").map(str::to_string))
            .collect();
        Self::new(ids)
    }
}

impl HeadingAdapter for HeadingIdAdapter {
    fn enter(
        &self,
        output: &mut dyn Write,
        heading: &HeadingMeta,
        _sourcepos: Option<Sourcepos>,
    ) -> io::Result<()> {
        let ordinal = self.cursor.fetch_add(1, Ordering::Relaxed);

        match self.ids.get(ordinal).and_then(Option::as_deref) {
            Some(id) => write!(
                output,
                "<h{} id=\"{}\">",
                heading.level,
                html_escape::encode_double_quoted_attribute(id)
            ),
            None => write!(output, "<h{}>", heading.level),
        }
    }

    fn exit(&self, output: &mut dyn Write, heading: &HeadingMeta) -> io::Result<()> {
        writeln!(output, "</h{}>", heading.level)
    }
}
