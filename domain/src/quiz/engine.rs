//! Adaptive quiz engine
//!
//! State machine driving a single quiz session:
//!
//! ```text
//! NotStarted ──start_quiz──▶ InProgress ──submit_answer──▶ Finished
//!      ▲                      │     ▲                         │
//!      │                      └─────┘ advance / extend        │
//!      └──────────────────────── reset_quiz ◀─────────────────┘
//! ```
//!
//! Every operation is a soft no-op when its precondition does not hold.
//! The outcome value says what happened; the session is never corrupted.

use super::random::{RandomSource, shuffle};
use super::result::QuizResult;
use super::rules::{QuizRules, TieBreak};
use super::state::{Progress, QuizPhase, SessionState};
use super::tally::Scores;
use crate::catalog::{Catalog, Family, Question};
use crate::core::error::DomainError;
use std::sync::Arc;
use tracing::{debug, info};

/// What [`QuizEngine::start_quiz`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A fresh session was drawn with this many questions
    Started { question_count: usize },
    /// Nothing changed
    Ignored(DomainError),
}

/// What [`QuizEngine::submit_answer`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved on to an already queued question
    Advanced { position: usize },
    /// Appended a tie-break question and moved on to it
    Extended {
        question_id: String,
        extra_questions: usize,
    },
    /// The session is over
    Finished,
    /// Nothing changed
    Ignored(DomainError),
}

impl SubmitOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, SubmitOutcome::Ignored(_))
    }
}

/// Adaptive personality quiz over an immutable [`Catalog`]
///
/// The engine owns exactly one optional session. Hosts needing several
/// independent sessions hold several engines sharing the same catalog.
///
/// # Example
///
/// ```
/// use quiz_domain::catalog::{Catalog, Family, Outcome, Question};
/// use quiz_domain::core::locale::LocalizedText;
/// use quiz_domain::quiz::{IdentityRandom, QuizEngine, QuizPhase};
/// use std::collections::BTreeMap;
/// use std::sync::Arc;
///
/// let outcomes = vec![
///     Outcome::new("elf", Family::Race, LocalizedText::new(), ["agile"]),
///     Outcome::new("rogue", Family::Class, LocalizedText::new(), ["agile"]),
///     Outcome::new("urchin", Family::Background, LocalizedText::new(), ["agile"]),
/// ];
/// let questions = vec![Question::new("q1", vec![vec!["agile".to_string()]], BTreeMap::new())];
/// let catalog = Arc::new(Catalog::new(outcomes, BTreeMap::new(), questions).unwrap());
///
/// let mut engine = QuizEngine::new(catalog, IdentityRandom);
/// engine.start_quiz();
/// engine.submit_answer(0);
///
/// assert_eq!(engine.phase(), QuizPhase::Finished);
/// assert_eq!(engine.scores().unwrap().tally(Family::Race).votes("elf"), Some(1));
/// ```
pub struct QuizEngine<R: RandomSource> {
    catalog: Arc<Catalog>,
    rules: QuizRules,
    rng: R,
    session: Option<SessionState>,
}

impl<R: RandomSource> QuizEngine<R> {
    /// Create an engine in the `NotStarted` phase with default rules
    pub fn new(catalog: Arc<Catalog>, rng: R) -> Self {
        Self {
            catalog,
            rules: QuizRules::default(),
            rng,
            session: None,
        }
    }

    pub fn with_rules(mut self, rules: QuizRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &QuizRules {
        &self.rules
    }

    pub fn phase(&self) -> QuizPhase {
        self.session
            .as_ref()
            .map_or(QuizPhase::NotStarted, SessionState::phase)
    }

    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    pub fn scores(&self) -> Option<&Scores> {
        self.session.as_ref().map(SessionState::scores)
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == QuizPhase::Finished
    }

    /// The question awaiting an answer, if a session is in progress
    pub fn current_question(&self) -> Option<&Question> {
        self.session
            .as_ref()
            .and_then(SessionState::current_question_id)
            .and_then(|id| self.catalog.question(id))
    }

    pub fn progress(&self) -> Option<Progress> {
        self.session.as_ref().map(|state| Progress {
            position: state.position(),
            total: state.total(),
            denominator: self.rules.progress_denominator(state.total()),
        })
    }

    /// Final result, available once the session is finished
    pub fn result(&self, tie_break: TieBreak) -> Option<QuizResult> {
        self.session
            .as_ref()
            .filter(|state| state.is_finished())
            .map(|state| QuizResult::from_session(state, tie_break))
    }

    /// Begin a fresh session, replacing any existing one
    ///
    /// Shuffles all question ids and keeps the first
    /// [`QuizRules::initial_questions`] of them.
    pub fn start_quiz(&mut self) -> StartOutcome {
        if !self.catalog.is_playable() {
            debug!("start_quiz ignored: catalog is not playable");
            return StartOutcome::Ignored(DomainError::EmptyCatalog);
        }

        let mut question_ids: Vec<String> =
            self.catalog.question_ids().map(str::to_string).collect();
        shuffle(&mut question_ids, &mut self.rng);
        question_ids.truncate(self.rules.initial_questions.max(1));

        let question_count = question_ids.len();
        self.session = Some(SessionState::new(
            question_ids,
            Scores::zeroed(&self.catalog),
        ));

        info!(
            "Quiz started with {} of {} questions",
            question_count,
            self.catalog.question_count()
        );
        StartOutcome::Started { question_count }
    }

    /// Record an answer to the current question and move the session on
    pub fn submit_answer(&mut self, answer_index: usize) -> SubmitOutcome {
        let Some(state) = self.session.as_ref() else {
            return Self::ignore(DomainError::NoActiveSession);
        };
        if state.is_finished() {
            return Self::ignore(DomainError::SessionFinished);
        }
        let Some(question_id) = state.current_question_id() else {
            return Self::ignore(DomainError::NoActiveSession);
        };
        let Some(question) = self.catalog.question(question_id) else {
            return Self::ignore(DomainError::UnknownQuestion(question_id.to_string()));
        };
        let Some(attributes) = question.option_attributes(answer_index) else {
            return Self::ignore(DomainError::AnswerOutOfRange {
                index: answer_index,
                options: question.option_count(),
            });
        };

        let mut next = state.clone();
        for attribute_id in attributes {
            for family in Family::ALL {
                if let Some(outcome) = self
                    .catalog
                    .find_outcome_owning_attribute(family, attribute_id)
                {
                    next.scores.tally_mut(family).increment(outcome.id());
                }
            }
        }
        next.position += 1;

        debug!(
            question = question.id(),
            answer = answer_index,
            races = %next.scores.tally(Family::Race).summary(),
            classes = %next.scores.tally(Family::Class).summary(),
            backgrounds = %next.scores.tally(Family::Background).summary(),
            "Answer recorded"
        );

        let outcome = if next.position < next.total() {
            SubmitOutcome::Advanced {
                position: next.position,
            }
        } else if next.position >= self.rules.min_questions && next.scores.any_tied() {
            match Self::draw_unused_question(&self.catalog, &mut self.rng, &next) {
                Some(question_id) => {
                    next.question_ids.push(question_id.clone());
                    next.extra_questions += 1;
                    info!(
                        "Tie in {:?}; appended question {} (extra #{})",
                        next.scores.tied_families(),
                        question_id,
                        next.extra_questions
                    );
                    SubmitOutcome::Extended {
                        question_id,
                        extra_questions: next.extra_questions,
                    }
                }
                None => {
                    info!("Question pool exhausted with an unresolved tie");
                    next.finished = true;
                    SubmitOutcome::Finished
                }
            }
        } else {
            next.finished = true;
            SubmitOutcome::Finished
        };

        if next.finished {
            info!(
                "Quiz finished after {} questions ({} extra)",
                next.position, next.extra_questions
            );
        }

        self.session = Some(next);
        outcome
    }

    /// Discard the session and return to `NotStarted`
    pub fn reset_quiz(&mut self) {
        if self.session.take().is_some() {
            debug!("Quiz session reset");
        }
    }

    /// Uniformly pick a catalog question not yet in the session
    fn draw_unused_question(
        catalog: &Catalog,
        rng: &mut R,
        state: &SessionState,
    ) -> Option<String> {
        let unused: Vec<&str> = catalog
            .question_ids()
            .filter(|id| !state.contains_question(id))
            .collect();
        if unused.is_empty() {
            return None;
        }
        Some(unused[rng.next_index(unused.len())].to_string())
    }

    fn ignore(reason: DomainError) -> SubmitOutcome {
        debug!("submit_answer ignored: {}", reason);
        SubmitOutcome::Ignored(reason)
    }
}
