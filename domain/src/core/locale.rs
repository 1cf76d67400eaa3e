//! Localized text value object

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale used when the requested translation is missing
pub const FALLBACK_LOCALE: &str = "en";

/// Normalize a locale tag to its language part
///
/// E.g., "de-DE" -> "de", "EN" -> "en"
pub fn language_of(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_lowercase()
}

/// Mapping from locale code to display text (Value Object)
///
/// Lookups fall back to [`FALLBACK_LOCALE`] and never fail loudly:
/// a missing translation yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation (builder style)
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Resolve the text for a locale, falling back to English
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        self.0
            .get(&language_of(locale))
            .or_else(|| self.0.get(FALLBACK_LOCALE))
            .map(String::as_str)
    }

    /// Resolve the text or return `default` when no translation matches
    pub fn resolve_or<'a>(&'a self, locale: &str, default: &'a str) -> &'a str {
        self.resolve(locale).unwrap_or(default)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for LocalizedText {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_of() {
        assert_eq!(language_of("de-DE"), "de");
        assert_eq!(language_of("EN"), "en");
        assert_eq!(language_of("pt_BR"), "pt");
    }

    #[test]
    fn test_resolve_exact_and_regional() {
        let text = LocalizedText::new().with("en", "Elf").with("de", "Elf (de)");
        assert_eq!(text.resolve("de"), Some("Elf (de)"));
        assert_eq!(text.resolve("de-AT"), Some("Elf (de)"));
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        let text = LocalizedText::new().with("en", "Dwarf");
        assert_eq!(text.resolve("fr"), Some("Dwarf"));
    }

    #[test]
    fn test_resolve_missing() {
        let text = LocalizedText::new().with("de", "Zwerg");
        assert_eq!(text.resolve("fr"), None);
        assert_eq!(text.resolve_or("fr", "dwarf"), "dwarf");
    }

    #[test]
    fn test_deserialize_transparent() {
        let text: LocalizedText = serde_json::from_str(r#"{"en":"Rogue","de":"Schurke"}"#).unwrap();
        assert_eq!(text.resolve("de"), Some("Schurke"));
        assert_eq!(text.locales().collect::<Vec<_>>(), vec!["de", "en"]);
    }
}
