//! Line-oriented block classification for the blog markdown dialect.

/// A maximal run of source lines classified as one markdown construct.
///
/// Blocks are derived fresh on every render call and never stored. The
/// classifier recognizes table runs before anything else so that pipe and
/// asterisk characters inside cells cannot be mistaken for list or
/// emphasis markers of adjacent blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading of level 1 to 3 with its raw text content.
    Heading { level: u8, text: String },
    /// Horizontal rule from a line containing exactly `---`.
    Rule,
    /// Pipe table. `header` is present when the second row of the run
    /// was a separator row (`|---|---|`), which is itself dropped.
    Table {
        header: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
    /// Run of consecutive list items, ordered (`1. x`) or unordered (`- x`).
    List { ordered: bool, items: Vec<String> },
    /// Leftover text wrapped in a paragraph at render time.
    Paragraph { text: String },
}

/// Splits markdown source into classified blocks.
///
/// Scans line by line. Blank lines separate blocks and never produce
/// output themselves. A line that fits no other construct joins the
/// current paragraph.
pub fn split_blocks(source: &str) -> Vec<Block> {
    let lines: Vec<&str> = source.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() {
            i += 1;
            continue;
        }

        // Table runs take precedence over every other construct
        if is_table_row(line) {
            let start = i;
            while i < lines.len() && is_table_row(lines[i].trim()) {
                i += 1;
            }
            let run: Vec<&str> = lines[start..i].iter().map(|l| l.trim()).collect();
            blocks.push(parse_table(&run));
            continue;
        }

        if line == "---" {
            blocks.push(Block::Rule);
            i += 1;
            continue;
        }

        if let Some((level, text)) = heading(line) {
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if ordered_item(line).is_some() {
            let mut items = Vec::new();
            while i < lines.len()
                && let Some(item) = ordered_item(lines[i].trim())
            {
                items.push(item.to_string());
                i += 1;
            }
            blocks.push(Block::List {
                ordered: true,
                items,
            });
            continue;
        }

        if unordered_item(line).is_some() {
            let mut items = Vec::new();
            while i < lines.len()
                && let Some(item) = unordered_item(lines[i].trim())
            {
                items.push(item.to_string());
                i += 1;
            }
            blocks.push(Block::List {
                ordered: false,
                items,
            });
            continue;
        }

        // Paragraph: accumulate until a blank line or another block start
        let mut text_lines = vec![line];
        i += 1;
        while i < lines.len() {
            let next = lines[i].trim();
            if next.is_empty() || starts_block(next) {
                break;
            }
            text_lines.push(next);
            i += 1;
        }
        blocks.push(Block::Paragraph {
            text: text_lines.join("\n"),
        });
    }

    blocks
}

/// Returns true when the line would open a non-paragraph block.
fn starts_block(line: &str) -> bool {
    is_table_row(line)
        || line == "---"
        || heading(line).is_some()
        || ordered_item(line).is_some()
        || unordered_item(line).is_some()
}

/// A well-formed table row both starts and ends with a pipe.
///
/// Lines containing pipes that fail this shape degrade to paragraph
/// text instead of corrupting an adjacent table run.
fn is_table_row(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// Splits a table row into trimmed, non-empty cells.
fn split_cells(row: &str) -> Vec<String> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

/// A separator row consists solely of cells made of `-`, `:` and spaces.
fn is_separator_row(row: &str) -> bool {
    let cells = split_cells(row);
    !cells.is_empty()
        && cells
            .iter()
            .all(|cell| cell.contains('-') && cell.chars().all(|c| matches!(c, '-' | ':' | ' ')))
}

/// Builds a table block from a run of table rows.
///
/// The first row becomes the header only when the second row of the run
/// is a separator row. Separator rows are dropped wherever they appear
/// so they can never leak into output. Rows keep their own cell counts.
fn parse_table(run: &[&str]) -> Block {
    let header = if run.len() >= 2 && is_separator_row(run[1]) {
        Some(split_cells(run[0]))
    } else {
        None
    };

    let data_start = if header.is_some() { 2 } else { 0 };
    let rows = run[data_start..]
        .iter()
        .filter(|row| !is_separator_row(row))
        .map(|row| split_cells(row))
        .collect();

    Block::Table { header, rows }
}

/// Matches `# `, `## ` or `### ` prefixes, longest first, so a line is
/// never double-converted. Four or more hashes are not a heading.
fn heading(line: &str) -> Option<(u8, &str)> {
    for (prefix, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some((level, rest));
        }
    }
    None
}

/// Matches `N. text` where N is one or more ASCII digits.
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

/// Matches `- text` list items.
fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
}
