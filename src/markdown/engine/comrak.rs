use comrak::arena_tree::NodeEdge;
use comrak::nodes::{AstNode, NodeValue, Sourcepos};
use comrak::{Arena, Options};

use crate::config::MarkdownConfig;
use crate::markdown::types::{Token, TokenKind};

/// Create comrak options for the configured dialect: CommonMark plus
/// autolinks and smart punctuation, with raw HTML escaped
pub fn create_comrak_options(config: &MarkdownConfig) -> Options<'static> {
    let mut options = Options::default();

    // Extension options
    options.extension.autolink = config.autolink;

    // Render options, raw HTML is shown as text and never passed through
    options.render.unsafe_ = false;
    options.render.escape = true;
    options.render.hardbreaks = false;

    // Parse options
    options.parse.smart = config.typographer;

    options
}

/// Parse markdown into a comrak AST owned by `arena`
pub fn parse_document<'a>(
    arena: &'a Arena<AstNode<'a>>,
    source: &str,
    options: &Options,
) -> &'a AstNode<'a> {
    comrak::parse_document(arena, source, options)
}

/// Blocks whose children are inline content
fn holds_inlines(value: &NodeValue) -> bool {
    matches!(value, NodeValue::Paragraph | NodeValue::Heading(_) | NodeValue::TableCell)
}

/// Tag name of a block token
fn block_tag(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::BlockQuote => "block_quote",
        NodeValue::List(_) => "list",
        NodeValue::Item(_) => "item",
        NodeValue::CodeBlock(_) => "code_block",
        NodeValue::HtmlBlock(_) => "html_block",
        NodeValue::Paragraph => "paragraph",
        NodeValue::Heading(_) => "heading",
        NodeValue::ThematicBreak => "thematic_break",
        NodeValue::FootnoteDefinition(_) => "footnote_definition",
        NodeValue::Table(_) => "table",
        NodeValue::TableRow(_) => "table_row",
        NodeValue::TableCell => "table_cell",
        _ => "block",
    }
}

/// Flatten the block structure of a document into an ordered token sequence.
///
/// Inline nodes never get tokens of their own: a heading or paragraph yields
/// its opening token, one `Inline` token, and its closing token. For headings
/// the inline token carries the heading's markdown source as written, so
/// `## See [docs](https://x.io)` keeps its link destination. `source` must be
/// the text `root` was parsed from.
pub fn tokenize<'a>(root: &'a AstNode<'a>, source: &str) -> Vec<Token> {
    let lines: Vec<&str> = source.lines().collect();
    let mut tokens = Vec::new();

    for edge in root.traverse() {
        match edge {
            NodeEdge::Start(node) => {
                let data = node.data.borrow();
                if matches!(data.value, NodeValue::Document) || !data.value.block() {
                    continue;
                }

                if let NodeValue::Heading(heading) = &data.value {
                    let content = heading_source(&lines, data.sourcepos, heading.setext)
                        .unwrap_or_else(|| collect_text(node));
                    tokens.push(Token::new(TokenKind::HeadingOpen, format!("h{}", heading.level)));
                    tokens.push(Token::inline(content));
                } else if holds_inlines(&data.value) {
                    tokens.push(Token::new(TokenKind::Open, block_tag(&data.value)));
                    tokens.push(Token::inline(collect_text(node)));
                } else if node.first_child().is_some() {
                    tokens.push(Token::new(TokenKind::Open, block_tag(&data.value)));
                } else {
                    let mut token = Token::new(TokenKind::Block, block_tag(&data.value));
                    token.content = leaf_literal(&data.value);
                    tokens.push(token);
                }
            }
            NodeEdge::End(node) => {
                let data = node.data.borrow();
                if matches!(data.value, NodeValue::Document) || !data.value.block() {
                    continue;
                }

                if let NodeValue::Heading(heading) = &data.value {
                    tokens.push(Token::new(TokenKind::HeadingClose, format!("h{}", heading.level)));
                } else if holds_inlines(&data.value) || node.first_child().is_some() {
                    tokens.push(Token::new(TokenKind::Close, block_tag(&data.value)));
                }
            }
        }
    }

    tokens
}

/// Markdown source of a heading's inline content, without the `#` markers
/// or the setext underline, trimmed.
///
/// Returns `None` when the source position does not line up with `lines`.
fn heading_source(lines: &[&str], sourcepos: Sourcepos, setext: bool) -> Option<String> {
    let first = sourcepos.start.line.checked_sub(1)?;
    let column = sourcepos.start.column.saturating_sub(1);
    let opening = lines.get(first)?.get(column..)?;

    if !setext {
        return Some(strip_atx_markers(opening).to_string());
    }

    // The last line of a setext heading is its underline
    let last = sourcepos.end.line.checked_sub(1)?;
    let mut text = vec![opening.trim()];
    for line in lines.get(first + 1..last)? {
        text.push(continuation_line(line, column).trim());
    }

    Some(text.join("\n").trim().to_string())
}

/// Drop the container prefix (`> ` markers, indentation) from a continuation
/// line. Lazy continuation lines carry no prefix and are kept whole.
fn continuation_line(line: &str, column: usize) -> &str {
    match line.get(..column) {
        Some(prefix) if prefix.chars().all(|c| c == '>' || c.is_whitespace()) => &line[column..],
        _ => line,
    }
}

/// Strip the opening `#` run and an optional closing `#` sequence from an ATX heading line
fn strip_atx_markers(line: &str) -> &str {
    let content = line.trim_start().trim_start_matches('#');
    let content = content.trim().trim_end_matches('\r');

    let without_closing = content.trim_end_matches('#');
    if without_closing.is_empty() {
        return without_closing;
    }
    if without_closing.len() < content.len() && without_closing.ends_with([' ', '\t']) {
        return without_closing.trim_end();
    }

    content
}

/// Literal text of a leaf block, empty for blocks without any
fn leaf_literal(value: &NodeValue) -> String {
    match value {
        NodeValue::CodeBlock(block) => block.literal.to_string(),
        NodeValue::HtmlBlock(block) => block.literal.to_string(),
        _ => String::new(),
    }
}

/// Plain text of a node's inline descendants. Breaks become single spaces.
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();

    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(literal) => text.push_str(literal),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }

    text
}
