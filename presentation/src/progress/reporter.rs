//! Progress reporting for quiz sessions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quiz_application::ports::progress::{NoQuizProgress, QuizProgressNotifier};
use quiz_domain::{Family, Progress, QuizResult};
use std::sync::Arc;

/// How progress is shown on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// No progress output (`--quiet`)
    Hidden,
    /// One plain line per event, for pipes and log files
    Lines,
    /// Progress bar, only when stderr is a terminal
    Bar,
}

impl ProgressMode {
    pub fn select(quiet: bool, stderr_is_terminal: bool) -> Self {
        match (quiet, stderr_is_terminal) {
            (true, _) => ProgressMode::Hidden,
            (false, true) => ProgressMode::Bar,
            (false, false) => ProgressMode::Lines,
        }
    }

    pub fn notifier(self) -> Arc<dyn QuizProgressNotifier> {
        match self {
            ProgressMode::Hidden => Arc::new(NoQuizProgress),
            ProgressMode::Lines => Arc::new(SimpleProgress),
            ProgressMode::Bar => Arc::new(ProgressReporter::new()),
        }
    }
}

/// Reports progress with a progress bar after every answer
///
/// The bar is redrawn as a static line after each answer so it never
/// competes with the question prompt for the cursor.
pub struct ProgressReporter {
    style: ProgressStyle,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            style: Self::bar_style(),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Percentage of answers given, matching the bar position
    fn bar_message(progress: &Progress) -> String {
        format!("{:.0}%", progress.answered_fraction() * 100.0)
    }

    fn tied_names(tied: &[Family]) -> String {
        tied.iter()
            .map(|family| family.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgressNotifier for ProgressReporter {
    fn on_quiz_started(&self, question_count: usize) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            format!("{} questions drawn", question_count).bold()
        );
    }

    fn on_answer_recorded(&self, progress: &Progress) {
        let len = progress.denominator as u64;
        let pb = ProgressBar::new(len);
        pb.set_style(self.style.clone());
        pb.set_prefix("Progress");
        pb.set_position(progress.answered() as u64);
        pb.abandon_with_message(Self::bar_message(progress));
    }

    fn on_extra_question(&self, _question_id: &str, tied: &[Family]) {
        eprintln!(
            "{} {}",
            "->".yellow(),
            format!("Still tied ({}), one more question", Self::tied_names(tied)).yellow()
        );
    }

    fn on_quiz_finished(&self, result: &QuizResult) {
        eprintln!(
            "{} {}",
            "v".green(),
            format!("Finished after {} questions", result.questions_answered).green()
        );
    }
}

/// Plain line progress for non-terminal stderr
pub struct SimpleProgress;

impl SimpleProgress {
    fn answer_line(progress: &Progress) -> String {
        format!("{}/{}", progress.answered(), progress.denominator)
    }
}

impl QuizProgressNotifier for SimpleProgress {
    fn on_quiz_started(&self, question_count: usize) {
        eprintln!("{} {} questions", "->".cyan(), question_count);
    }

    fn on_answer_recorded(&self, progress: &Progress) {
        eprintln!("  {} {}", "v".green(), Self::answer_line(progress));
    }

    fn on_extra_question(&self, _question_id: &str, tied: &[Family]) {
        eprintln!(
            "  {} tie in {}, one more question",
            "->".yellow(),
            ProgressReporter::tied_names(tied)
        );
    }
}
