//! Final quiz result as read by the presentation layer

use super::rules::TieBreak;
use super::state::SessionState;
use super::tally::Tally;
use crate::catalog::Family;
use serde::{Deserialize, Serialize};

/// Outcome of one family at the end of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyResult {
    pub family: Family,
    /// Presented winner, after applying the tie break
    pub winner: Option<String>,
    /// All outcomes sharing the top count, in declaration order
    pub leaders: Vec<String>,
    pub tally: Tally,
}

impl FamilyResult {
    /// The family ended with more than one leader
    pub fn is_tied(&self) -> bool {
        self.leaders.len() > 1
    }
}

/// Snapshot of a session's scores with one winner per family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub families: Vec<FamilyResult>,
    pub questions_answered: usize,
    pub extra_questions: usize,
    pub finished: bool,
    pub tie_break: TieBreak,
}

impl QuizResult {
    pub fn from_session(state: &SessionState, tie_break: TieBreak) -> Self {
        let families = state
            .scores()
            .iter()
            .map(|tally| FamilyResult {
                family: tally.family(),
                winner: tally.winner(tie_break).map(str::to_string),
                leaders: tally.leaders().into_iter().map(str::to_string).collect(),
                tally: tally.clone(),
            })
            .collect();

        Self {
            families,
            questions_answered: state.position(),
            extra_questions: state.extra_questions(),
            finished: state.is_finished(),
            tie_break,
        }
    }

    pub fn family(&self, family: Family) -> Option<&FamilyResult> {
        self.families.iter().find(|f| f.family == family)
    }

    pub fn winner(&self, family: Family) -> Option<&str> {
        self.family(family).and_then(|f| f.winner.as_deref())
    }

    /// Some family still has several leaders (question pool ran out)
    pub fn has_unresolved_tie(&self) -> bool {
        self.families.iter().any(FamilyResult::is_tied)
    }
}
