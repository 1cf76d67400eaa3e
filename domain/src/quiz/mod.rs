//! Adaptive quiz domain
//!
//! A session draws an initial random batch of questions, accumulates votes
//! per family and, once the minimum has been answered, keeps appending one
//! unused question at a time while any family is tied for first place.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  QuizEngine<R: RandomSource>                                │
//! │   ├── Arc<Catalog>        immutable, shared between engines │
//! │   ├── QuizRules           batch size / minimum length       │
//! │   └── Option<SessionState>                                  │
//! │        ├── question_ids   grows, never reorders             │
//! │        ├── position       monotone                          │
//! │        └── Scores         one Tally per Family              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod engine;
pub mod random;
pub mod result;
pub mod rules;
pub mod state;
pub mod tally;

pub use engine::{QuizEngine, StartOutcome, SubmitOutcome};
pub use random::{IdentityRandom, RandomSource, ScriptedRandom, shuffle};
pub use result::{FamilyResult, QuizResult};
pub use rules::{QuizRules, TieBreak};
pub use state::{Progress, QuizPhase, SessionState};
pub use tally::{Scores, Tally, TallyEntry};
