//! Locale handling and embedded dictionaries for site chrome text.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fmt;

const FR: &str = include_str!("../locales/fr.json");
const EN: &str = include_str!("../locales/en.json");
const AR: &str = include_str!("../locales/ar.json");

/// Supported site locale.
///
/// French is the default site language; Arabic renders right-to-left.
/// Blog content exists in English and French only, so post lookup
/// searches those two in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Fr,
    En,
    Ar,
}

/// Default locale for the site and for dictionary fallback.
pub const DEFAULT_LOCALE: Locale = Locale::Fr;

/// Languages blog content is written in, in slug lookup order.
pub const BLOG_LOCALES: &[Locale] = &[Locale::En, Locale::Fr];

impl Locale {
    /// Parses a locale from its two-letter code.
    ///
    /// # Errors
    ///
    /// Returns error for any code other than `fr`, `en` or `ar`.
    pub fn parse(code: &str) -> Result<Self> {
        match code {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            _ => bail!("Unsupported locale: {}", code),
        }
    }

    /// Two-letter code used in paths and the HTML `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Text direction for the HTML `dir` attribute.
    pub fn html_dir(self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            _ => "ltr",
        }
    }

    /// Human readable language name in its own language.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::Fr => "Français",
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    /// Every locale the site chrome is translated into.
    pub fn all() -> &'static [Locale] {
        &[Locale::Fr, Locale::En, Locale::Ar]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translated chrome strings for one locale.
///
/// Dictionaries are JSON files embedded at compile time and looked up
/// by dotted key path. Missing keys fall back to the default locale's
/// dictionary, then to the key itself, so a half-translated locale
/// still renders a complete page.
pub struct Dictionary {
    locale: Locale,
    entries: Value,
    fallback: Value,
}

impl Dictionary {
    /// Loads the dictionary for a locale with default-locale fallback.
    ///
    /// # Errors
    ///
    /// Returns error if an embedded dictionary file is not valid JSON.
    pub fn load(locale: Locale) -> Result<Self> {
        let entries = parse(locale)?;
        let fallback = parse(DEFAULT_LOCALE)?;
        Ok(Self {
            locale,
            entries,
            fallback,
        })
    }

    /// Locale this dictionary was loaded for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolves a dotted key path like `nav.services`.
    ///
    /// Falls back to the default locale, then to the key itself.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        lookup(&self.entries, key)
            .or_else(|| lookup(&self.fallback, key))
            .unwrap_or(key)
    }
}

fn parse(locale: Locale) -> Result<Value> {
    let raw = match locale {
        Locale::Fr => FR,
        Locale::En => EN,
        Locale::Ar => AR,
    };
    serde_json::from_str(raw)
        .with_context(|| format!("Invalid dictionary JSON for locale: {}", locale))
}

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = root;
    for part in key.split('.') {
        node = node.get(part)?;
    }
    node.as_str()
}
