//! Site footer component

use maud::{Markup, html};

use crate::i18n::Dictionary;

/// Renders the site footer with tagline and rights notice
///
/// # Arguments
///
/// * `site_name`: Agency name shown in the copyright line
/// * `dict`: Dictionary for localized tagline and rights copy
///
/// # Returns
///
/// Footer markup
pub fn footer(site_name: &str, dict: &Dictionary) -> Markup {
    html! {
        footer class="site-footer" {
            p class="footer-tagline" { (dict.get("footer.tagline")) }
            p class="footer-rights" {
                (site_name) " · " (dict.get("footer.rights"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_footer_localized() {
        // Arrange
        let dict = Dictionary::load(Locale::Fr).expect("Should load dictionary");

        // Act
        let html = footer("Maghrib.Digital", &dict).into_string();

        // Assert
        assert!(html.contains("Maghrib.Digital"));
        assert!(html.contains("Tous droits réservés."));
    }
}
