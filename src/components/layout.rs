//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use crate::i18n::Dictionary;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure
/// across both page types. The wrapper sets the `lang` and `dir`
/// attributes from the dictionary locale (Arabic pages render
/// right-to-left) while the caller provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `site_name`: Site name appended to the title and shown in the footer
/// * `dict`: Dictionary whose locale drives `lang`/`dir` and footer copy
/// * `stylesheets`: Array of CSS file paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    title: &str,
    site_name: &str,
    dict: &Dictionary,
    stylesheets: &[&str],
    body: Markup,
) -> Markup {
    let locale = dict.locale();
    html! {
        (DOCTYPE)
        html lang=(locale.code()) dir=(locale.html_dir()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site_name) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer(site_name, dict))
            }
        }
    }
}
