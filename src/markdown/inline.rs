//! Inline span transforms applied within block-level text.

/// Applies every inline transform to a span of block text.
///
/// Order matters: bold runs before italic, and the italic scan only
/// considers lone asterisks, so a `**` marker is never half-consumed
/// as two single asterisks. Unmatched markers pass through as literal
/// text.
pub fn apply(text: &str) -> String {
    let text = replace_delimited(text, "**", "<strong>", "</strong>");
    let text = replace_italic(&text);
    let text = replace_links(&text);
    replace_glyphs(&text)
}

/// Wraps non-greedy `delim..delim` spans in the given open/close tags.
///
/// A delimiter without a later closing partner is emitted verbatim.
fn replace_delimited(text: &str, delim: &str, open: &str, close: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        let Some(end) = after.find(delim) else {
            break;
        };

        result.push_str(&rest[..start]);
        result.push_str(open);
        result.push_str(&after[..end]);
        result.push_str(close);
        rest = &after[end + delim.len()..];
    }

    result.push_str(rest);
    result
}

/// Wraps lone `*..*` spans in `em` tags.
///
/// Only asterisks outside a `**` run qualify as italic delimiters, so
/// an unmatched bold marker left behind by the bold pass stays literal
/// instead of being paired as two italics.
fn replace_italic(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = find_lone_star(rest, 0) {
        let Some(end) = find_lone_star(rest, start + 1) else {
            break;
        };

        result.push_str(&rest[..start]);
        result.push_str("<em>");
        result.push_str(&rest[start + 1..end]);
        result.push_str("</em>");
        rest = &rest[end + 1..];
    }

    result.push_str(rest);
    result
}

/// Finds the next `*` at or after `from` that is not part of a longer
/// asterisk run.
fn find_lone_star(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }

        let mut run_end = i + 1;
        while run_end < bytes.len() && bytes[run_end] == b'*' {
            run_end += 1;
        }

        if run_end - i == 1 {
            return Some(i);
        }
        i = run_end;
    }

    None
}

/// Converts `[label](url)` spans into anchor tags.
///
/// Incomplete link syntax is left untouched.
fn replace_links(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let Some(mid) = rest[open..].find("](").map(|p| open + p) else {
            break;
        };
        let Some(close) = rest[mid + 2..].find(')').map(|p| mid + 2 + p) else {
            break;
        };

        result.push_str(&rest[..open]);
        result.push_str("<a href=\"");
        result.push_str(&rest[mid + 2..close]);
        result.push_str("\">");
        result.push_str(&rest[open + 1..mid]);
        result.push_str("</a>");
        rest = &rest[close + 1..];
    }

    result.push_str(rest);
    result
}

/// Substitutes check and cross glyphs with styled inline spans.
///
/// Colors are supplied by `markdown.css` via the glyph classes.
fn replace_glyphs(text: &str) -> String {
    text.replace('✅', "<span class=\"glyph-check\">✓</span>")
        .replace('❌', "<span class=\"glyph-cross\">✗</span>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_before_italic() {
        // Arrange & Act
        let html = apply("**bold** and *italic*");

        // Assert
        assert_eq!(html, "<strong>bold</strong> and <em>italic</em>");
        assert!(!html.contains('*'), "No stray asterisks should remain");
    }

    #[test]
    fn test_multiple_bold_spans_are_non_greedy() {
        // Arrange & Act
        let html = apply("**a** mid **b**");

        // Assert
        assert_eq!(html, "<strong>a</strong> mid <strong>b</strong>");
    }

    #[test]
    fn test_unmatched_bold_marker_passes_through() {
        // Arrange & Act
        let html = apply("broken ** marker");

        // Assert
        assert_eq!(html, "broken ** marker");
    }

    #[test]
    fn test_unmatched_bold_marker_is_not_paired_as_italics() {
        // Arrange: the dangling ** must stay literal while the real
        // italic span still converts
        let html = apply("** dangling with *real* emphasis");

        // Assert
        assert_eq!(html, "** dangling with <em>real</em> emphasis");
    }

    #[test]
    fn test_unmatched_italic_marker_passes_through() {
        // Arrange & Act
        let html = apply("5 * 3 = 15");

        // Assert
        assert_eq!(html, "5 * 3 = 15");
    }

    #[test]
    fn test_link_conversion() {
        // Arrange & Act
        let html = apply("see [the docs](https://example.com) here");

        // Assert
        assert_eq!(
            html,
            "see <a href=\"https://example.com\">the docs</a> here"
        );
    }

    #[test]
    fn test_incomplete_link_passes_through() {
        // Arrange & Act
        let html = apply("[orphan bracket");

        // Assert
        assert_eq!(html, "[orphan bracket");
    }

    #[test]
    fn test_glyph_substitution() {
        // Arrange & Act
        let html = apply("Done ✅ Failed ❌");

        // Assert
        assert_eq!(
            html,
            "Done <span class=\"glyph-check\">✓</span> Failed <span class=\"glyph-cross\">✗</span>"
        );
    }

    #[test]
    fn test_bold_inside_link_label() {
        // Arrange & Act
        let html = apply("[**strong label**](https://example.com)");

        // Assert
        assert_eq!(
            html,
            "<a href=\"https://example.com\"><strong>strong label</strong></a>"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        // Arrange & Act
        let html = apply("nothing special here");

        // Assert
        assert_eq!(html, "nothing special here");
    }
}
