use std::ops::RangeInclusive;
use log::trace;

use crate::markdown::toc::slug::SlugRegistry;
use crate::markdown::types::{Token, TokenKind, TocItem};

/// Parse the depth out of a heading tag such as `h2`
fn heading_level(tag: &str) -> Option<u8> {
    tag.get(1..)?.parse().ok()
}

/// Give every heading-open token a unique `id` attribute and return the
/// headings whose level falls in `toc_levels`, in document order.
///
/// A heading whose text trims to nothing, or whose tag carries no level, is
/// left untouched and does not advance the slug registry.
pub fn index_headings_with_levels(
    tokens: &mut [Token],
    toc_levels: RangeInclusive<u8>,
) -> Vec<TocItem> {
    let mut registry = SlugRegistry::new();
    let mut toc_items = Vec::new();

    for index in 0..tokens.len() {
        if tokens[index].kind != TokenKind::HeadingOpen {
            continue;
        }

        let level = heading_level(&tokens[index].tag);
        let text = match tokens.get(index + 1) {
            Some(inline) if inline.kind == TokenKind::Inline => inline.content.trim().to_string(),
            _ => String::new(),
        };

        let level = match level {
            Some(level) if !text.is_empty() => level,
            _ => {
                trace!("Skipping heading {:?} with text {:?}", tokens[index].tag, text);
                continue;
            }
        };

        let id = registry.unique_slug(&text);
        tokens[index].set_attr("id", id.as_str());

        if toc_levels.contains(&level) {
            toc_items.push(TocItem { id, level, text });
        }
    }

    toc_items
}
