//! Markdown rendering for the restricted blog post dialect.

use super::block::{Block, split_blocks};
use super::inline;

/// Renders the restricted markdown dialect used in blog post bodies.
///
/// Supports headings (h1-h3), bold, italic, links, horizontal rules,
/// ordered and unordered lists, pipe tables and check/cross glyph
/// substitution. Loose text wraps in paragraphs. Rendering is a pure
/// function of the input: no state, no I/O, and it never fails —
/// unsupported syntax degrades to literal paragraph text.
///
/// Works in two phases: the source is first split into classified
/// blocks, then each block renders independently with inline transforms
/// applied only to block-level text. Already-emitted markup is never
/// re-scanned, so substitution passes cannot corrupt each other.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a renderer for the blog post dialect.
    pub fn new() -> Self {
        Self
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// The output is a fragment for embedding into a page template,
    /// never a full document. Empty input yields an empty fragment.
    ///
    /// # Arguments
    ///
    /// * `source`: Raw post body in the supported dialect
    ///
    /// # Returns
    ///
    /// HTML fragment with one element per block, joined by newlines
    pub fn render(&self, source: &str) -> String {
        let blocks = split_blocks(source);
        let rendered: Vec<String> = blocks.iter().map(render_block).collect();
        rendered.join("\n")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", inline::apply(text))
        }
        Block::Rule => "<hr/>".to_string(),
        Block::Table { header, rows } => render_table(header.as_deref(), rows),
        Block::List { ordered, items } => render_list(*ordered, items),
        Block::Paragraph { text } => format!("<p>{}</p>", inline::apply(text)),
    }
}

/// Renders a table run inside a scroll container.
///
/// Header cells become `th`, data cells `td`. Cell content receives the
/// full inline transform set, so bold spans and glyphs inside pricing
/// tables render the same as in paragraphs.
fn render_table(header: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let mut html = String::from("<div class=\"table-scroll\"><table>");

    if let Some(cells) = header {
        html.push_str("<tr>");
        for cell in cells {
            html.push_str("<th>");
            html.push_str(&inline::apply(cell));
            html.push_str("</th>");
        }
        html.push_str("</tr>");
    }

    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&inline::apply(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }

    html.push_str("</table></div>");
    html
}

fn render_list(ordered: bool, items: &[String]) -> String {
    let tag = if ordered { "ol" } else { "ul" };
    let mut html = format!("<{tag}>");
    for item in items {
        html.push_str("<li>");
        html.push_str(&inline::apply(item));
        html.push_str("</li>");
    }
    html.push_str(&format!("</{tag}>"));
    html
}
