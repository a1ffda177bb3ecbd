//! Front matter parsing for flat-file blog posts.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Raw metadata header of a post file.
///
/// Every field is optional; the content store fills in house defaults
/// for anything missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Splits a `---` fenced YAML header from the post body.
///
/// A file that does not open with a fence is treated as all body with
/// empty front matter.
///
/// # Errors
///
/// Returns error when the fenced header is not valid YAML.
pub fn parse(content: &str) -> Result<(FrontMatter, &str)> {
    let Some(rest) = content.strip_prefix("---\n") else {
        return Ok((FrontMatter::default(), content));
    };

    let Some((header, after)) = split_at_closing_fence(rest) else {
        return Ok((FrontMatter::default(), content));
    };

    let body = after.trim_start_matches('\n');

    if header.trim().is_empty() {
        return Ok((FrontMatter::default(), body));
    }

    let front = serde_yaml::from_str(header).context("Invalid front matter YAML")?;
    Ok((front, body))
}

/// Splits at the first line that is exactly `---`.
///
/// A line merely starting with `---` is header or body content, not a
/// fence, so `--- note` or `----` never terminates the header.
fn split_at_closing_fence(rest: &str) -> Option<(&str, &str)> {
    // Empty header: the closing fence follows immediately
    if let Some(after) = rest.strip_prefix("---")
        && (after.is_empty() || after.starts_with('\n'))
    {
        return Some(("", after));
    }

    let mut search = 0;
    while let Some(pos) = rest[search..].find("\n---").map(|p| search + p) {
        let after = &rest[pos + "\n---".len()..];
        if after.is_empty() || after.starts_with('\n') {
            return Some((&rest[..pos], after));
        }
        search = pos + 1;
    }

    None
}
