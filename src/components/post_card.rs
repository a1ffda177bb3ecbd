//! Blog listing card component

use maud::{Markup, html};

use crate::content::PostMeta;
use crate::util::format_date;

/// Renders one post card for the listing grid
///
/// Shows the featured image with a language badge, the category label,
/// title, excerpt and a date/author meta line. The date is formatted in
/// the post's own language, not the page chrome locale.
///
/// # Arguments
///
/// * `meta`: Post metadata to display
///
/// # Returns
///
/// Card markup linking to the post page
pub fn post_card(meta: &PostMeta) -> Markup {
    html! {
        article class="post-card" {
            a href=(format!("blog/{}.html", meta.slug)) {
                div class="card-image" {
                    img src=(meta.image) alt=(meta.title) loading="lazy";
                    span class=(format!("lang-badge lang-{}", meta.lang.code())) {
                        (meta.lang.display_name())
                    }
                }
                div class="card-body" {
                    span class="card-category" { (meta.category) }
                    h3 class="card-title" { (meta.title) }
                    p class="card-excerpt" { (meta.excerpt) }
                    div class="card-meta" {
                        span class="card-date" { (format_date(&meta.date, meta.lang)) }
                        span class="card-author" { (meta.author) }
                    }
                }
            }
        }
    }
}
