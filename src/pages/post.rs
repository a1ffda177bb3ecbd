//! Blog post page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::navbar;
use crate::content::Post;
use crate::i18n::Dictionary;
use crate::util::{format_date, reading_time};

/// Generates a blog post page
///
/// Renders the post header (back link, category, language badge, title
/// and author/date/reading-time meta line), the featured image, the
/// pre-rendered body fragment, share links and the closing call to
/// action. Page chrome uses the post's own language, matching how the
/// site labels post pages.
///
/// # Arguments
///
/// * `site_name`: Agency name for chrome and title suffix
/// * `dict`: Dictionary loaded for the post's language
/// * `post`: The post to render
/// * `body_html`: Markdown body already rendered to an HTML fragment
/// * `share_url`: Absolute URL of this page for share intents
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate_post(
    site_name: &str,
    dict: &Dictionary,
    post: &Post,
    body_html: &str,
    share_url: &str,
) -> Markup {
    let meta = &post.meta;
    let minutes = reading_time(&post.body);

    page_wrapper(
        &meta.title,
        site_name,
        dict,
        &["../assets/post.css", "../assets/markdown.css"],
        html! {
            (navbar(site_name, dict, "../"))

            header class="post-hero" {
                a href="../index.html" class="back-link" { "← " (dict.get("blog.back")) }

                div class="post-tags" {
                    span class="post-category" { (meta.category) }
                    span class=(format!("lang-badge lang-{}", meta.lang.code())) {
                        (meta.lang.display_name())
                    }
                }

                h1 class="post-title" { (meta.title) }

                div class="post-meta" {
                    span class="post-author" { (meta.author) }
                    span class="post-date" { (format_date(&meta.date, meta.lang)) }
                    span class="post-reading-time" {
                        (minutes) " " (dict.get("blog.reading_time"))
                    }
                }
            }

            figure class="post-image" {
                img src=(meta.image) alt=(meta.title);
            }

            article class="post-content" {
                (PreEscaped(body_html))
            }

            (share_section(dict, &meta.title, share_url))

            section class="post-cta" {
                h2 { (dict.get("blog.cta_title")) }
                p { (dict.get("blog.cta_text")) }
                a href="/#contact" class="cta-button" { (dict.get("blog.cta_button")) }
            }
        },
    )
}

/// Renders the social share row with intent links.
fn share_section(dict: &Dictionary, title: &str, share_url: &str) -> Markup {
    let encoded_url = urlencode(share_url);
    let encoded_title = urlencode(title);

    html! {
        div class="share-section" {
            span class="share-label" { (dict.get("blog.share")) }
            a href=(format!("https://twitter.com/intent/tweet?text={}&url={}", encoded_title, encoded_url))
                target="_blank" rel="noopener noreferrer" class="share-link" { "Twitter" }
            a href=(format!("https://www.facebook.com/sharer/sharer.php?u={}", encoded_url))
                target="_blank" rel="noopener noreferrer" class="share-link" { "Facebook" }
            a href=(format!("https://www.linkedin.com/sharing/share-offsite/?url={}", encoded_url))
                target="_blank" rel="noopener noreferrer" class="share-link" { "LinkedIn" }
        }
    }
}

/// Percent-encodes a string for use inside a query parameter.
///
/// Unreserved characters pass through; everything else is encoded
/// byte-wise, which is enough for share intent URLs.
fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}
