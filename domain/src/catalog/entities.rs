//! Catalog entities: outcomes and questions

use super::family::Family;
use crate::core::locale::{FALLBACK_LOCALE, LocalizedText, language_of};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A candidate result within a family (Entity)
///
/// Accumulates votes whenever a chosen answer lists one of its attribute ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    id: String,
    family: Family,
    name: LocalizedText,
    attribute_ids: HashSet<String>,
}

impl Outcome {
    pub fn new(
        id: impl Into<String>,
        family: Family,
        name: LocalizedText,
        attribute_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            family,
            name,
            attribute_ids: attribute_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn name(&self) -> &LocalizedText {
        &self.name
    }

    /// Display name for a locale, falling back to the outcome id
    pub fn display_name(&self, locale: &str) -> &str {
        self.name.resolve_or(locale, &self.id)
    }

    pub fn has_attribute(&self, attribute_id: &str) -> bool {
        self.attribute_ids.contains(attribute_id)
    }

    pub fn attribute_ids(&self) -> impl Iterator<Item = &str> {
        self.attribute_ids.iter().map(String::as_str)
    }
}

/// Question and answer texts in one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionText {
    pub question: String,
    pub answers: Vec<String>,
}

/// A multiple-choice question (Entity)
///
/// Option `i` awards a vote to every outcome owning one of the attribute ids
/// listed in `option_attributes[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: String,
    option_attributes: Vec<Vec<String>>,
    translations: BTreeMap<String, QuestionText>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        option_attributes: Vec<Vec<String>>,
        translations: BTreeMap<String, QuestionText>,
    ) -> Self {
        Self {
            id: id.into(),
            option_attributes,
            translations,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn option_count(&self) -> usize {
        self.option_attributes.len()
    }

    /// Attribute ids awarded by an option, or `None` if the index is out of range
    pub fn option_attributes(&self, index: usize) -> Option<&[String]> {
        self.option_attributes.get(index).map(Vec::as_slice)
    }

    pub fn all_option_attributes(&self) -> impl Iterator<Item = &str> {
        self.option_attributes.iter().flatten().map(String::as_str)
    }

    /// Text for a locale, falling back to English
    pub fn text(&self, locale: &str) -> Option<&QuestionText> {
        self.translations
            .get(&language_of(locale))
            .or_else(|| self.translations.get(FALLBACK_LOCALE))
    }

    pub fn translations(&self) -> &BTreeMap<String, QuestionText> {
        &self.translations
    }
}
