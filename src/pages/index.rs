//! Blog listing page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::navbar;
use crate::components::post_card::post_card;
use crate::content::PostMeta;
use crate::i18n::{Dictionary, Locale};

/// Language filter tabs shown above the listing grid.
///
/// Each tab is a link to a pre-rendered variant of the listing: the
/// full listing or one filtered to a single post language.
const FILTERS: &[(Option<Locale>, &str)] = &[
    (None, "index.html"),
    (Some(Locale::En), "en.html"),
    (Some(Locale::Fr), "fr.html"),
];

/// Generates the blog listing page
///
/// Shows the localized hero copy, the language filter tabs and a card
/// grid of the given posts. An empty post set renders the localized
/// empty state instead of the grid.
///
/// # Arguments
///
/// * `site_name`: Agency name for chrome and title suffix
/// * `dict`: Dictionary for the page chrome language
/// * `posts`: Post metadata to list, already filtered and sorted
/// * `active`: Language filter this variant was rendered for
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate_listing(
    site_name: &str,
    dict: &Dictionary,
    posts: &[&PostMeta],
    active: Option<Locale>,
) -> Markup {
    page_wrapper(
        dict.get("blog.title"),
        site_name,
        dict,
        &["assets/index.css"],
        html! {
            (navbar(site_name, dict, ""))

            header class="blog-hero" {
                h1 class="hero-title" { (dict.get("blog.title")) }
                p class="hero-subtitle" { (dict.get("blog.subtitle")) }
            }

            div class="language-filter" {
                @for (filter, target) in FILTERS {
                    @let label = match filter {
                        None => dict.get("blog.all"),
                        Some(locale) => locale.display_name(),
                    };
                    @if *filter == active {
                        span class="filter-tab filter-active" { (label) }
                    } @else {
                        a href=(target) class="filter-tab" { (label) }
                    }
                }
            }

            main {
                @if posts.is_empty() {
                    p class="empty-state" { (dict.get("blog.empty")) }
                } @else {
                    div class="post-grid" {
                        @for meta in posts {
                            (post_card(meta))
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(slug: &str, lang: Locale) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: format!("Title {}", slug),
            excerpt: "Excerpt.".to_string(),
            date: "2025-01-01".to_string(),
            author: "Sara".to_string(),
            category: "General".to_string(),
            image: "/blog/default.jpg".to_string(),
            lang,
        }
    }

    #[test]
    fn test_listing_renders_cards() {
        // Arrange
        let dict = Dictionary::load(Locale::En).expect("Should load dictionary");
        let a = meta("a", Locale::En);
        let b = meta("b", Locale::Fr);
        let posts = vec![&a, &b];

        // Act
        let html = generate_listing("Maghrib.Digital", &dict, &posts, None).into_string();

        // Assert
        assert!(html.contains("href=\"blog/a.html\""), "{}", html);
        assert!(html.contains("href=\"blog/b.html\""), "{}", html);
        assert!(html.contains("Insights &amp; Guides"), "Hero title: {}", html);
    }

    #[test]
    fn test_listing_active_filter_is_not_a_link() {
        // Arrange
        let dict = Dictionary::load(Locale::En).expect("Should load dictionary");

        // Act
        let html =
            generate_listing("Maghrib.Digital", &dict, &[], Some(Locale::En)).into_string();

        // Assert
        assert!(
            html.contains("<span class=\"filter-tab filter-active\">English</span>"),
            "{}",
            html
        );
        assert!(html.contains("href=\"index.html\""), "All tab links out");
        assert!(html.contains("href=\"fr.html\""), "Other tab links out");
    }

    #[test]
    fn test_listing_empty_state() {
        // Arrange
        let dict = Dictionary::load(Locale::En).expect("Should load dictionary");

        // Act
        let html = generate_listing("Maghrib.Digital", &dict, &[], None).into_string();

        // Assert
        assert!(html.contains("No posts in this language yet."), "{}", html);
        assert!(!html.contains("post-grid"));
    }
}
