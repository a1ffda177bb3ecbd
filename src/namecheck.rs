//! Business-name availability checker for the LLC formation widget.

use anyhow::{Result, bail};

/// Entity suffixes stripped before the availability lookup.
const ENTITY_SUFFIXES: &[&str] = &["llc", "inc", "corp", "corporation", "ltd", "limited", "sarl"];

/// Tokens that mark a name as taken in the simulated registry.
const RESERVED_TOKENS: &[&str] = &["test", "admin", "llc", "corp"];

/// Suffixes offered as alternatives when a name is unavailable.
const SUGGESTION_SUFFIXES: &[&str] = &["Group", "Ventures", "Holdings", "Global", "Solutions"];

/// Outcome of one availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCheck {
    /// The cleaned name the check actually ran against.
    pub name: String,
    pub available: bool,
    /// Alternative names, only populated when unavailable.
    pub suggestions: Vec<String>,
}

/// Strips legal entity suffixes from a business name.
///
/// Matching is word-bounded and case-insensitive, so "Atlas LLC"
/// cleans to "Atlas" while "Allcare" stays intact.
pub fn clean_name(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !ENTITY_SUFFIXES.contains(&word.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks whether a business name is available in Wyoming.
///
/// This is the simulated check the site runs client-side; the real
/// registry lookup is performed manually for clients. Names containing
/// a reserved token are reported as taken, with suffix-based
/// suggestions generated from the cleaned name.
///
/// # Errors
///
/// Returns error when the cleaned name is shorter than 3 characters.
pub fn check_availability(name: &str) -> Result<NameCheck> {
    let cleaned = clean_name(name.trim());

    if cleaned.chars().count() < 3 {
        bail!("Business name must be at least 3 characters");
    }

    let lower = cleaned.to_lowercase();
    let available = !RESERVED_TOKENS.iter().any(|token| lower.contains(token));

    let suggestions = if available {
        Vec::new()
    } else {
        SUGGESTION_SUFFIXES
            .iter()
            .map(|suffix| format!("{} {}", cleaned, suffix))
            .collect()
    };

    Ok(NameCheck {
        name: cleaned,
        available,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_strips_entity_suffixes() {
        // Arrange & Act & Assert
        assert_eq!(clean_name("Atlas LLC"), "Atlas");
        assert_eq!(clean_name("Atlas Inc"), "Atlas");
        assert_eq!(clean_name("atlas sarl"), "atlas");
        assert_eq!(clean_name("Atlas Media Corporation"), "Atlas Media");
    }

    #[test]
    fn test_clean_name_is_word_bounded() {
        // Arrange & Act & Assert
        assert_eq!(clean_name("Allcare"), "Allcare", "No substring stripping");
        assert_eq!(clean_name("Incubator Labs"), "Incubator Labs");
    }

    #[test]
    fn test_available_name() {
        // Arrange & Act
        let result = check_availability("Atlas Media").expect("Should check name");

        // Assert
        assert!(result.available);
        assert!(result.suggestions.is_empty());
        assert_eq!(result.name, "Atlas Media");
    }

    #[test]
    fn test_reserved_token_is_unavailable() {
        // Arrange & Act
        let result = check_availability("Testify Labs").expect("Should check name");

        // Assert
        assert!(!result.available, "Names containing 'test' are taken");
    }

    #[test]
    fn test_unavailable_name_gets_five_suggestions() {
        // Arrange & Act
        let result = check_availability("Admin Systems").expect("Should check name");

        // Assert
        assert!(!result.available);
        assert_eq!(
            result.suggestions,
            vec![
                "Admin Systems Group",
                "Admin Systems Ventures",
                "Admin Systems Holdings",
                "Admin Systems Global",
                "Admin Systems Solutions",
            ]
        );
    }

    #[test]
    fn test_suffix_stripped_before_reserved_scan() {
        // Arrange: the LLC suffix is cleaned away, not treated as reserved
        let result = check_availability("Atlas LLC").expect("Should check name");

        // Assert
        assert!(result.available);
        assert_eq!(result.name, "Atlas");
    }

    #[test]
    fn test_short_name_is_rejected() {
        // Arrange & Act & Assert
        assert!(check_availability("ab").is_err());
        assert!(check_availability("   ").is_err());
        assert!(
            check_availability("Xy LLC").is_err(),
            "Length check runs on the cleaned name"
        );
    }
}
