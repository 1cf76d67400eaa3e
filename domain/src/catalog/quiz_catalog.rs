//! The immutable quiz catalog

use super::entities::{Outcome, Question};
use super::error::CatalogError;
use super::family::Family;
use crate::core::locale::LocalizedText;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Immutable dataset of outcomes and questions (Aggregate)
///
/// Built once from parsed content and never mutated. Outcomes keep their
/// declaration order within each family; questions keep their document order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    outcomes: [Vec<Outcome>; 3],
    attributes: BTreeMap<String, LocalizedText>,
    questions: Vec<Question>,
    question_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build and validate a catalog
    ///
    /// Outcomes are grouped by their own [`Family`].
    pub fn new(
        outcomes: Vec<Outcome>,
        attributes: BTreeMap<String, LocalizedText>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        let mut grouped: [Vec<Outcome>; 3] = Default::default();
        let mut seen: [HashSet<String>; 3] = Default::default();

        for outcome in outcomes {
            let slot = outcome.family().index();
            if !seen[slot].insert(outcome.id().to_string()) {
                return Err(CatalogError::DuplicateOutcome {
                    family: outcome.family(),
                    id: outcome.id().to_string(),
                });
            }
            grouped[slot].push(outcome);
        }

        let mut question_index = HashMap::with_capacity(questions.len());
        for (i, question) in questions.iter().enumerate() {
            if question.option_count() == 0 {
                return Err(CatalogError::NoOptions(question.id().to_string()));
            }
            for (locale, text) in question.translations() {
                if text.answers.len() != question.option_count() {
                    return Err(CatalogError::TranslationMismatch {
                        question: question.id().to_string(),
                        locale: locale.clone(),
                        options: question.option_count(),
                        answers: text.answers.len(),
                    });
                }
            }
            if question_index.insert(question.id().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id().to_string()));
            }
        }

        Ok(Self {
            outcomes: grouped,
            attributes,
            questions,
            question_index,
        })
    }

    /// Outcomes of a family in declaration order
    pub fn outcomes(&self, family: Family) -> &[Outcome] {
        &self.outcomes[family.index()]
    }

    pub fn outcome(&self, family: Family, id: &str) -> Option<&Outcome> {
        self.outcomes(family).iter().find(|o| o.id() == id)
    }

    /// Ids of a family's outcomes in declaration order
    pub fn outcome_ids(&self, family: Family) -> impl Iterator<Item = &str> {
        self.outcomes(family).iter().map(Outcome::id)
    }

    /// First outcome in `family` whose attribute set contains `attribute_id`
    pub fn find_outcome_owning_attribute(
        &self,
        family: Family,
        attribute_id: &str,
    ) -> Option<&Outcome> {
        self.outcomes(family)
            .iter()
            .find(|o| o.has_attribute(attribute_id))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.question_index.get(id).map(|&i| &self.questions[i])
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(Question::id)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Display name of an attribute, falling back to its id
    pub fn attribute_name<'a>(&'a self, attribute_id: &'a str, locale: &str) -> &'a str {
        self.attributes
            .get(attribute_id)
            .and_then(|name| name.resolve(locale))
            .unwrap_or(attribute_id)
    }

    /// A session can only start with at least one question and one outcome per family
    pub fn is_playable(&self) -> bool {
        !self.questions.is_empty() && self.outcomes.iter().all(|family| !family.is_empty())
    }

    /// Attribute ids referenced by question options that no outcome in any family owns
    pub fn dangling_attribute_ids(&self) -> BTreeSet<&str> {
        self.questions
            .iter()
            .flat_map(Question::all_option_attributes)
            .filter(|attr| {
                Family::ALL
                    .iter()
                    .all(|&family| self.find_outcome_owning_attribute(family, attr).is_none())
            })
            .collect()
    }
}
