//! Translation lookup for consumer responses.
//!
//! Every consumer receives a [`Translator`]; when no language table is mounted
//! the state carries [`DefaultTranslations`], so lookups never fail.

mod tables;

use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Parses an optional `?lang=` value, defaulting to English for anything unknown.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

pub trait Translator: Send + Sync {
    fn lookup(&self, language: Language, key: &str) -> Option<&'static str>;

    /// Translated text, falling back to the English defaults and then to the key itself.
    fn t(&self, language: Language, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| tables::lookup(tables::DEFAULTS, key))
            .unwrap_or(key)
            .to_string()
    }
}

/// Built-in English strings for the catalog views.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslations;

impl Translator for DefaultTranslations {
    fn lookup(&self, _language: Language, key: &str) -> Option<&'static str> {
        tables::lookup(tables::DEFAULTS, key)
    }
}

/// Full site tables for English and Portuguese.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageTable;

impl Translator for LanguageTable {
    fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        let table = match language {
            Language::En => tables::EN,
            Language::Pt => tables::PT,
        };
        tables::lookup(table, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_translations_fall_back_to_key() {
        let t = DefaultTranslations;
        assert_eq!(t.t(Language::Pt, "products.viewDetails"), "View Details");
        assert_eq!(t.t(Language::En, "missing.key"), "missing.key");
    }

    #[test]
    fn language_table_prefers_requested_language() {
        let t = LanguageTable;
        assert_eq!(t.t(Language::Pt, "nav.home"), "Início");
        assert_eq!(t.t(Language::En, "nav.home"), "Home");
        // Portuguese table lacks this key; the English default fills in.
        assert_eq!(
            t.t(Language::Pt, "products.leadingManufacturer"),
            "Leading manufacturer of PVC products"
        );
    }

    #[test]
    fn unknown_language_query_defaults_to_english() {
        assert_eq!(Language::from_query(Some("PT")), Language::Pt);
        assert_eq!(Language::from_query(Some("fr")), Language::En);
        assert_eq!(Language::from_query(None), Language::En);
    }
}
