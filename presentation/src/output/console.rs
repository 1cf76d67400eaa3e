//! Console output formatter for quiz sessions

use colored::Colorize;
use quiz_domain::{
    Catalog, Family, OutputFormat, Progress, Question, QuizResult, Scores, Tally,
};

/// Formats questions, tallies and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question with numbered options
    ///
    /// Text resolves to the requested language, then English, then empty.
    pub fn format_question(question: &Question, locale: &str, progress: Option<&Progress>) -> String {
        let mut output = String::new();
        let text = question.text(locale);

        if let Some(progress) = progress {
            output.push_str(&format!(
                "{} {}\n",
                format!("Question {}", progress.position + 1).cyan().bold(),
                format!("({:.0}%)", progress.fraction() * 100.0).dimmed()
            ));
        }

        let prompt = text.map(|t| t.question.as_str()).unwrap_or_default();
        output.push_str(&format!("{}\n", prompt.bold()));

        for index in 0..question.option_count() {
            let answer = text
                .and_then(|t| t.answers.get(index))
                .map(String::as_str)
                .unwrap_or_default();
            output.push_str(&format!("  {} {}\n", format!("{}.", index + 1).yellow(), answer));
        }

        output
    }

    /// Format the running tally of every family
    pub fn format_scores(scores: &Scores, catalog: &Catalog, locale: &str) -> String {
        let mut output = Self::section_header("Current Scores");
        for tally in scores.iter() {
            output.push_str(&Self::format_tally(tally, catalog, locale));
        }
        output
    }

    /// Format a finished result in the requested format
    pub fn format_result(
        result: &QuizResult,
        catalog: &Catalog,
        locale: &str,
        format: OutputFormat,
    ) -> String {
        match format {
            OutputFormat::Full => Self::format_full(result, catalog, locale),
            OutputFormat::Winners => Self::format_winners(result, catalog, locale),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the winner of each family (concise output)
    pub fn format_winners(result: &QuizResult, catalog: &Catalog, locale: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Your Character"));
        output.push('\n');

        for family_result in &result.families {
            let family = family_result.family;
            let winner = family_result
                .winner
                .as_deref()
                .map(|id| Self::outcome_name(catalog, family, id, locale))
                .unwrap_or("-");

            output.push_str(&format!(
                "{:>12} {}",
                format!("{}:", family.display_name()).cyan().bold(),
                winner.green().bold()
            ));

            if family_result.is_tied() {
                let others: Vec<&str> = family_result
                    .leaders
                    .iter()
                    .filter(|id| Some(id.as_str()) != family_result.winner.as_deref())
                    .map(|id| Self::outcome_name(catalog, family, id, locale))
                    .collect();
                output.push_str(&format!(
                    " {}",
                    format!("(tied with {}, picked {})", others.join(", "), result.tie_break)
                        .dimmed()
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "\n{} {}",
            "Questions answered:".dimmed(),
            result.questions_answered
        ));
        if result.extra_questions > 0 {
            output.push_str(&format!(
                " {}",
                format!("({} to break ties)", result.extra_questions).dimmed()
            ));
        }
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format winners followed by every family's ranked tally
    pub fn format_full(result: &QuizResult, catalog: &Catalog, locale: &str) -> String {
        let mut output = Self::format_winners(result, catalog, locale);
        output.push_str(&Self::section_header("Tallies"));
        for family_result in &result.families {
            output.push_str(&Self::format_tally(&family_result.tally, catalog, locale));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(result: &QuizResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_tally(tally: &Tally, catalog: &Catalog, locale: &str) -> String {
        let family = tally.family();
        let mut output = format!("\n{}\n", family.display_name().yellow().bold());
        for entry in tally.ranked() {
            output.push_str(&format!(
                "  {:>3}  {}\n",
                entry.votes,
                Self::outcome_name(catalog, family, &entry.outcome_id, locale)
            ));
        }
        output
    }

    fn outcome_name<'a>(catalog: &'a Catalog, family: Family, id: &'a str, locale: &str) -> &'a str {
        catalog
            .outcome(family, id)
            .map(|outcome| outcome.display_name(locale))
            .unwrap_or(id)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::quiz::IdentityRandom;
    use quiz_domain::{LocalizedText, Outcome, QuestionText, QuizEngine, TieBreak};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn catalog() -> Arc<Catalog> {
        let name = |en: &str, de: &str| LocalizedText::new().with("en", en).with("de", de);
        let outcomes = vec![
            Outcome::new("elf", Family::Race, name("Elf", "Elf"), ["agile"]),
            Outcome::new("dwarf", Family::Race, name("Dwarf", "Zwerg"), ["strong"]),
            Outcome::new("rogue", Family::Class, name("Rogue", "Schurke"), ["agile"]),
            Outcome::new("fighter", Family::Class, name("Fighter", "Kämpfer"), ["strong"]),
            Outcome::new("urchin", Family::Background, name("Urchin", "Straßenkind"), ["agile"]),
            Outcome::new("soldier", Family::Background, name("Soldier", "Soldat"), ["strong"]),
        ];
        let mut translations = BTreeMap::new();
        translations.insert(
            "en".to_string(),
            QuestionText {
                question: "Pick a weapon".to_string(),
                answers: vec!["Dagger".to_string(), "Hammer".to_string(), "Both".to_string()],
            },
        );
        let question = Question::new(
            "weapon",
            vec![
                vec!["agile".to_string()],
                vec!["strong".to_string()],
                vec!["agile".to_string(), "strong".to_string()],
            ],
            translations,
        );
        Arc::new(Catalog::new(outcomes, BTreeMap::new(), vec![question]).unwrap())
    }

    fn finished(answer: usize, tie_break: TieBreak) -> (Arc<Catalog>, QuizResult) {
        let catalog = catalog();
        let mut engine = QuizEngine::new(catalog.clone(), IdentityRandom);
        engine.start_quiz();
        engine.submit_answer(answer);
        let result = engine.result(tie_break).unwrap();
        (catalog, result)
    }

    #[test]
    fn test_format_question_numbers_options() {
        let catalog = catalog();
        let question = catalog.question("weapon").unwrap();
        let output = ConsoleFormatter::format_question(question, "en", None);
        assert!(output.contains("Pick a weapon"));
        assert!(output.contains("Dagger"));
        assert!(output.contains("3."));
    }

    #[test]
    fn test_format_question_falls_back_to_english() {
        let catalog = catalog();
        let question = catalog.question("weapon").unwrap();
        let output = ConsoleFormatter::format_question(question, "fr-CA", None);
        assert!(output.contains("Hammer"));
    }

    #[test]
    fn test_format_winners_uses_localized_names() {
        let (catalog, result) = finished(1, TieBreak::LastDeclared);
        let output = ConsoleFormatter::format_winners(&result, &catalog, "de");
        assert!(output.contains("Zwerg"));
        assert!(output.contains("Soldat"));
        assert!(!output.contains("tied with"));
    }

    #[test]
    fn test_format_winners_mentions_tie() {
        let (catalog, result) = finished(2, TieBreak::LastDeclared);
        let output = ConsoleFormatter::format_winners(&result, &catalog, "en");
        assert!(output.contains("tied with"));
        assert!(output.contains("last-declared"));
    }

    #[test]
    fn test_format_full_lists_every_outcome() {
        let (catalog, result) = finished(0, TieBreak::LastDeclared);
        let output = ConsoleFormatter::format_full(&result, &catalog, "en");
        assert!(output.contains("Tallies"));
        assert!(output.contains("Dwarf"));
        assert!(output.contains("Fighter"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let (_, result) = finished(0, TieBreak::LastDeclared);
        let json = ConsoleFormatter::format_json(&result);
        let parsed: QuizResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
