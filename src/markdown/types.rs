use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// What a token marks in the flattened document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Start of a heading, tag is `h1`..`h6`
    HeadingOpen,
    /// End of a heading
    HeadingClose,
    /// Start of any other container block (paragraph, list, item, quote, ...)
    Open,
    /// End of any other container block
    Close,
    /// The inline content of a heading or paragraph, flattened to plain text
    Inline,
    /// Self-contained leaf block (code block, html block, thematic break)
    Block,
}

/// One node of the flattened markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub tag: String,
    pub attrs: HashMap<String, String>,
    pub content: String,
}

impl Token {
    pub fn new(kind: TokenKind, tag: impl Into<String>) -> Self {
        Token {
            kind,
            tag: tag.into(),
            attrs: HashMap::new(),
            content: String::new(),
        }
    }

    /// Create an inline token carrying literal text
    pub fn inline(content: impl Into<String>) -> Self {
        Token {
            content: content.into(),
            ..Token::new(TokenKind::Inline, "")
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }
}

/// A single table of contents entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    pub id: String,
    pub level: u8,
    pub text: String,
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMarkdown {
    pub content_html: String,
    pub toc_items: Vec<TocItem>,
}
