//! Wire shapes of the content documents
//!
//! These structs mirror the JSON files exactly and are converted into domain
//! entities right after parsing.

use quiz_application::OutcomeContent;
use quiz_domain::{Family, LocalizedText, Outcome, Question, QuestionText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One outcome entry in `races`, `classes` or `backgrounds`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRecord {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub attribute_ids: Vec<String>,
}

/// The outcome document (`dnd_data.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeDocument {
    pub races: Vec<OutcomeRecord>,
    pub classes: Vec<OutcomeRecord>,
    pub backgrounds: Vec<OutcomeRecord>,
    pub attributes: BTreeMap<String, LocalizedText>,
}

impl OutcomeDocument {
    fn records(&self, family: Family) -> &[OutcomeRecord] {
        match family {
            Family::Race => &self.races,
            Family::Class => &self.classes,
            Family::Background => &self.backgrounds,
        }
    }

    pub fn into_content(self) -> OutcomeContent {
        let outcomes = Family::ALL
            .iter()
            .flat_map(|&family| {
                self.records(family).iter().map(move |record| {
                    Outcome::new(
                        record.id.clone(),
                        family,
                        record.name.clone(),
                        record.attribute_ids.iter().cloned(),
                    )
                })
            })
            .collect();

        OutcomeContent {
            outcomes,
            attributes: self.attributes,
        }
    }
}

/// One entry of the question document (`dnd_questions.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub attribute_ids: Vec<Vec<String>>,
    #[serde(default)]
    pub translations: BTreeMap<String, QuestionText>,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        Question::new(record.id, record.attribute_ids, record.translations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_document_into_content() {
        let json = r#"{
            "races": [{"id": "elf", "name": {"en": "Elf"}, "attributeIds": ["agile"]}],
            "classes": [{"id": "rogue", "name": {"en": "Rogue"}, "attributeIds": ["agile", "sly"]}],
            "backgrounds": [],
            "attributes": {"agile": {"en": "Agile"}}
        }"#;
        let doc: OutcomeDocument = serde_json::from_str(json).unwrap();
        let content = doc.into_content();

        assert_eq!(content.outcomes.len(), 2);
        assert_eq!(content.outcomes[0].family(), Family::Race);
        assert_eq!(content.outcomes[1].id(), "rogue");
        assert!(content.outcomes[1].has_attribute("sly"));
        assert_eq!(content.attributes["agile"].resolve("en"), Some("Agile"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let doc: OutcomeDocument = serde_json::from_str(r#"{"races": []}"#).unwrap();
        assert!(doc.into_content().outcomes.is_empty());
    }

    #[test]
    fn test_question_record_into_question() {
        let json = r#"{
            "id": "q7",
            "attributeIds": [["agile"], ["strong", "brave"]],
            "translations": {
                "en": {"question": "Pick one", "answers": ["Bow", "Axe"]},
                "de": {"question": "Wähle", "answers": ["Bogen", "Axt"]}
            }
        }"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        let question = Question::from(record);

        assert_eq!(question.id(), "q7");
        assert_eq!(question.option_count(), 2);
        assert_eq!(question.text("de").unwrap().answers[1], "Axt");
    }
}
