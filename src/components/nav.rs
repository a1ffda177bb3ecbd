//! Site navigation bar component

use maud::{Markup, html};

use crate::i18n::Dictionary;

/// Renders the top navigation bar
///
/// Shows the agency wordmark and the main site sections. Section links
/// point at site-absolute routes served by the main site; the blog link
/// goes back to the generated listing.
///
/// # Arguments
///
/// * `site_name`: Wordmark text
/// * `dict`: Dictionary for localized section labels
/// * `root`: Relative prefix back to the listing (`""` or `"../"`)
///
/// # Returns
///
/// Navigation bar markup
pub fn navbar(site_name: &str, dict: &Dictionary, root: &str) -> Markup {
    html! {
        nav class="navbar" {
            a href=(format!("{}index.html", root)) class="nav-brand" { (site_name) }
            div class="nav-links" {
                a href="/" class="nav-link" { (dict.get("nav.home")) }
                a href="/#services" class="nav-link" { (dict.get("nav.services")) }
                a href=(format!("{}index.html", root)) class="nav-link nav-active" {
                    (dict.get("nav.blog"))
                }
                a href="/#contact" class="nav-link" { (dict.get("nav.contact")) }
            }
        }
    }
}
