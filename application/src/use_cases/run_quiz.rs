//! Run Quiz use case
//!
//! Drives one adaptive quiz session on top of [`QuizEngine`] and records every
//! transition to the structured event log.

use crate::config::QuizConfig;
use crate::ports::event_logger::{NoQuizEventLogger, QuizEvent, QuizEventLogger};
use crate::ports::progress::{NoQuizProgress, QuizProgressNotifier};
use quiz_domain::{
    Catalog, Progress, Question, QuizEngine, QuizPhase, QuizResult, RandomSource, Scores,
    StartOutcome, SubmitOutcome, TieBreak,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Use case for running an adaptive quiz session
///
/// Owns the engine; the host keeps one instance per independent session.
pub struct RunQuizUseCase<R: RandomSource> {
    engine: QuizEngine<R>,
    tie_break: TieBreak,
    logger: Arc<dyn QuizEventLogger>,
    progress: Arc<dyn QuizProgressNotifier>,
}

impl<R: RandomSource> RunQuizUseCase<R> {
    pub fn new(catalog: Arc<Catalog>, rng: R, config: QuizConfig) -> Self {
        Self {
            engine: QuizEngine::new(catalog, rng).with_rules(config.rules),
            tie_break: config.tie_break,
            logger: Arc::new(NoQuizEventLogger),
            progress: Arc::new(NoQuizProgress),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn QuizEventLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn QuizProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn engine(&self) -> &QuizEngine<R> {
        &self.engine
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn phase(&self) -> QuizPhase {
        self.engine.phase()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question()
    }

    pub fn progress(&self) -> Option<Progress> {
        self.engine.progress()
    }

    pub fn scores(&self) -> Option<&Scores> {
        self.engine.scores()
    }

    /// Final result with ties resolved by the configured rule
    pub fn result(&self) -> Option<QuizResult> {
        self.engine.result(self.tie_break)
    }

    /// Start a fresh session
    pub fn start(&mut self) -> StartOutcome {
        let outcome = self.engine.start_quiz();
        match &outcome {
            StartOutcome::Started { question_count } => {
                let question_ids = self
                    .engine
                    .session()
                    .map(|s| s.question_ids().to_vec())
                    .unwrap_or_default();
                self.logger.log(QuizEvent::new(
                    "quiz_started",
                    json!({
                        "question_count": question_count,
                        "question_ids": question_ids,
                        "pool_size": self.engine.catalog().question_count(),
                    }),
                ));
                self.progress.on_quiz_started(*question_count);
            }
            StartOutcome::Ignored(reason) => {
                warn!("Quiz could not start: {}", reason);
            }
        }
        outcome
    }

    /// Submit the answer to the current question
    pub fn answer(&mut self, answer_index: usize) -> SubmitOutcome {
        let question_id = self.current_question().map(|q| q.id().to_string());
        let outcome = self.engine.submit_answer(answer_index);

        match &outcome {
            SubmitOutcome::Ignored(reason) => {
                self.logger.log(QuizEvent::new(
                    "answer_ignored",
                    json!({
                        "answer_index": answer_index,
                        "reason": reason.to_string(),
                    }),
                ));
                return outcome;
            }
            _ => {
                self.logger.log(QuizEvent::new(
                    "answer_submitted",
                    json!({
                        "question_id": question_id,
                        "answer_index": answer_index,
                    }),
                ));
                if let Some(progress) = self.progress() {
                    self.progress.on_answer_recorded(&progress);
                }
            }
        }

        match &outcome {
            SubmitOutcome::Extended {
                question_id,
                extra_questions,
            } => {
                let tied: Vec<_> = self
                    .scores()
                    .map(Scores::tied_families)
                    .unwrap_or_default();
                self.logger.log(QuizEvent::new(
                    "extra_question_added",
                    json!({
                        "question_id": question_id,
                        "extra_questions": extra_questions,
                        "tied_families": tied,
                    }),
                ));
                self.progress.on_extra_question(question_id, &tied);
            }
            SubmitOutcome::Finished => {
                if let Some(result) = self.result() {
                    self.logger.log(QuizEvent::new(
                        "quiz_finished",
                        serde_json::to_value(&result).unwrap_or_default(),
                    ));
                    self.progress.on_quiz_finished(&result);
                }
            }
            _ => {}
        }
        outcome
    }

    /// Discard the session
    pub fn reset(&mut self) {
        if self.engine.phase() != QuizPhase::NotStarted {
            self.logger.log(QuizEvent::new("quiz_reset", json!({})));
        }
        self.engine.reset_quiz();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::quiz::IdentityRandom;
    use quiz_domain::{DomainError, Family, LocalizedText, Outcome, QuizRules};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl RecordingLogger {
        fn types(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
        }
    }

    impl QuizEventLogger for RecordingLogger {
        fn log(&self, event: QuizEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn catalog(question_count: usize) -> Arc<Catalog> {
        let outcomes = vec![
            Outcome::new("elf", Family::Race, LocalizedText::new(), ["agile"]),
            Outcome::new("dwarf", Family::Race, LocalizedText::new(), ["strong"]),
            Outcome::new("rogue", Family::Class, LocalizedText::new(), ["agile"]),
            Outcome::new("fighter", Family::Class, LocalizedText::new(), ["strong"]),
            Outcome::new("urchin", Family::Background, LocalizedText::new(), ["agile"]),
            Outcome::new("soldier", Family::Background, LocalizedText::new(), ["strong"]),
        ];
        let questions = (0..question_count)
            .map(|i| {
                Question::new(
                    format!("q{i}"),
                    vec![
                        vec!["agile".to_string()],
                        vec!["strong".to_string()],
                        vec!["agile".to_string(), "strong".to_string()],
                    ],
                    BTreeMap::new(),
                )
            })
            .collect();
        Arc::new(Catalog::new(outcomes, BTreeMap::new(), questions).unwrap())
    }

    fn use_case(question_count: usize, config: QuizConfig) -> RunQuizUseCase<IdentityRandom> {
        RunQuizUseCase::new(catalog(question_count), IdentityRandom, config)
    }

    #[test]
    fn test_full_session_logs_events() {
        let logger = Arc::new(RecordingLogger::default());
        let mut quiz = use_case(3, QuizConfig::default()).with_logger(logger.clone());

        quiz.start();
        quiz.answer(0);
        quiz.answer(7);
        quiz.answer(0);
        assert_eq!(quiz.answer(0), SubmitOutcome::Finished);

        assert_eq!(
            logger.types(),
            vec![
                "quiz_started",
                "answer_submitted",
                "answer_ignored",
                "answer_submitted",
                "answer_submitted",
                "quiz_finished"
            ]
        );
        let result = quiz.result().unwrap();
        assert_eq!(result.winner(Family::Race), Some("elf"));
    }

    #[test]
    fn test_extension_is_logged_with_tied_families() {
        let logger = Arc::new(RecordingLogger::default());
        let config = QuizConfig::default().with_rules(
            QuizRules::default()
                .with_initial_questions(2)
                .with_min_questions(2),
        );
        let mut quiz = use_case(4, config).with_logger(logger.clone());

        quiz.start();
        quiz.answer(2);
        let outcome = quiz.answer(2);
        assert!(matches!(outcome, SubmitOutcome::Extended { .. }));

        let events = logger.events.lock().unwrap();
        let (event_type, payload) = events.last().unwrap();
        assert_eq!(*event_type, "extra_question_added");
        assert_eq!(payload["extra_questions"], 1);
        assert_eq!(
            payload["tied_families"],
            json!(["race", "class", "background"])
        );
    }

    #[test]
    fn test_unresolved_tie_uses_configured_tie_break() {
        let config = QuizConfig::default().with_tie_break(TieBreak::FirstDeclared);
        let mut quiz = use_case(1, config);
        quiz.start();
        assert_eq!(quiz.answer(2), SubmitOutcome::Finished);

        let result = quiz.result().unwrap();
        assert!(result.has_unresolved_tie());
        assert_eq!(result.winner(Family::Race), Some("elf"));
        assert_eq!(result.tie_break, TieBreak::FirstDeclared);
    }

    #[derive(Default)]
    struct CountingProgress {
        answers: Mutex<Vec<usize>>,
        extras: Mutex<usize>,
        finished: Mutex<bool>,
    }

    impl QuizProgressNotifier for CountingProgress {
        fn on_quiz_started(&self, _question_count: usize) {}

        fn on_answer_recorded(&self, progress: &Progress) {
            self.answers.lock().unwrap().push(progress.position);
        }

        fn on_extra_question(&self, _question_id: &str, _tied: &[Family]) {
            *self.extras.lock().unwrap() += 1;
        }

        fn on_quiz_finished(&self, _result: &QuizResult) {
            *self.finished.lock().unwrap() = true;
        }
    }

    #[test]
    fn test_progress_notifier_follows_session() {
        let progress = Arc::new(CountingProgress::default());
        let config = QuizConfig::default().with_rules(
            QuizRules::default()
                .with_initial_questions(1)
                .with_min_questions(1),
        );
        let mut quiz = use_case(2, config).with_progress(progress.clone());

        quiz.start();
        assert!(matches!(quiz.answer(2), SubmitOutcome::Extended { .. }));
        assert_eq!(quiz.answer(2), SubmitOutcome::Finished);

        // Position after the final answer equals the sequence length
        assert_eq!(*progress.answers.lock().unwrap(), vec![1, 2]);
        assert_eq!(*progress.extras.lock().unwrap(), 1);
        assert!(*progress.finished.lock().unwrap());
    }

    #[test]
    fn test_answer_before_start_is_ignored() {
        let mut quiz = use_case(3, QuizConfig::default());
        assert_eq!(
            quiz.answer(0),
            SubmitOutcome::Ignored(DomainError::NoActiveSession)
        );
    }

    #[test]
    fn test_reset_and_restart() {
        let logger = Arc::new(RecordingLogger::default());
        let mut quiz = use_case(3, QuizConfig::default()).with_logger(logger.clone());
        quiz.start();
        quiz.answer(1);
        quiz.reset();
        assert_eq!(quiz.phase(), QuizPhase::NotStarted);
        // A second reset has nothing to discard
        quiz.reset();
        quiz.start();
        assert_eq!(quiz.progress().unwrap().position, 0);

        assert_eq!(
            logger.types(),
            vec!["quiz_started", "answer_submitted", "quiz_reset", "quiz_started"]
        );
    }
}
