//! REPL (Read-Eval-Print Loop) for taking the quiz interactively

use crate::ConsoleFormatter;
use colored::Colorize;
use quiz_application::RunQuizUseCase;
use quiz_domain::{OutputFormat, QuizPhase, RandomSource, StartOutcome, SubmitOutcome};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What the loop does after handling one line
enum Flow {
    Continue,
    Quit,
}

/// Interactive quiz REPL
pub struct QuizRepl<R: RandomSource> {
    use_case: RunQuizUseCase<R>,
    locale: String,
    format: OutputFormat,
}

impl<R: RandomSource> QuizRepl<R> {
    /// Create a new QuizRepl
    pub fn new(use_case: RunQuizUseCase<R>, locale: impl Into<String>) -> Self {
        Self {
            use_case,
            locale: locale.into(),
            format: OutputFormat::default(),
        }
    }

    /// Set the format of the final result
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn use_case(&self) -> &RunQuizUseCase<R> {
        &self.use_case
    }

    /// Run the interactive REPL on stdin/stdout
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run_with(stdin.lock(), io::stdout())
    }

    /// Run the REPL on arbitrary input and output streams
    pub fn run_with<I: BufRead, W: Write>(&mut self, mut input: I, mut out: W) -> io::Result<()> {
        self.print_welcome(&mut out)?;

        if !self.start(&mut out)? {
            return Ok(());
        }

        loop {
            let flow = match self.use_case.phase() {
                QuizPhase::InProgress => self.ask(&mut input, &mut out)?,
                QuizPhase::Finished => self.finish(&mut input, &mut out)?,
                QuizPhase::NotStarted => {
                    if self.start(&mut out)? {
                        Flow::Continue
                    } else {
                        Flow::Quit
                    }
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        Ok(())
    }

    fn start<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        match self.use_case.start() {
            StartOutcome::Started { .. } => Ok(true),
            StartOutcome::Ignored(reason) => {
                writeln!(out, "{} {}", "Error:".red().bold(), reason)?;
                Ok(false)
            }
        }
    }

    /// Show the current question and handle one line of input
    fn ask<I: BufRead, W: Write>(&mut self, input: &mut I, out: &mut W) -> io::Result<Flow> {
        let Some(question) = self.use_case.current_question() else {
            return Ok(Flow::Quit);
        };
        let option_count = question.option_count();
        let progress = self.use_case.progress();

        writeln!(out)?;
        write!(
            out,
            "{}",
            ConsoleFormatter::format_question(question, &self.locale, progress.as_ref())
        )?;

        let Some(line) = Self::prompt(input, out, "> ")? else {
            writeln!(out, "Bye!")?;
            return Ok(Flow::Quit);
        };

        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        if line.starts_with('/') {
            return self.handle_command(&line, out);
        }

        let outcome = match line.parse::<usize>() {
            Ok(choice) if choice >= 1 => self.use_case.answer(choice - 1),
            _ => {
                debug!("Rejected input: {:?}", line);
                writeln!(out, "Please enter a number between 1 and {}.", option_count)?;
                return Ok(Flow::Continue);
            }
        };

        match outcome {
            SubmitOutcome::Ignored(reason) => {
                debug!("Answer ignored: {}", reason);
                writeln!(out, "Please enter a number between 1 and {}.", option_count)?;
            }
            SubmitOutcome::Extended { .. } => {
                writeln!(
                    out,
                    "{}",
                    "It's close! One more question to break the tie.".yellow()
                )?;
            }
            SubmitOutcome::Advanced { .. } | SubmitOutcome::Finished => {}
        }

        Ok(Flow::Continue)
    }

    /// Print the result and offer a fresh session
    fn finish<I: BufRead, W: Write>(&mut self, input: &mut I, out: &mut W) -> io::Result<Flow> {
        if let Some(result) = self.use_case.result() {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                ConsoleFormatter::format_result(
                    &result,
                    self.use_case.catalog(),
                    &self.locale,
                    self.format
                )
            )?;
        }

        let answer = Self::prompt(input, out, "Play again? [y/N] ")?;
        match answer.as_deref().map(str::to_lowercase).as_deref() {
            Some("y") | Some("yes") | Some("/restart") => {
                self.use_case.reset();
                Ok(Flow::Continue)
            }
            _ => {
                writeln!(out, "Bye!")?;
                Ok(Flow::Quit)
            }
        }
    }

    /// Handle slash commands
    fn handle_command<W: Write>(&mut self, cmd: &str, out: &mut W) -> io::Result<Flow> {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                writeln!(out, "Bye!")?;
                Ok(Flow::Quit)
            }
            "/restart" | "/r" => {
                self.use_case.reset();
                writeln!(out, "{}", "Starting over.".cyan())?;
                Ok(Flow::Continue)
            }
            "/scores" | "/s" => {
                if let Some(scores) = self.use_case.scores() {
                    writeln!(
                        out,
                        "{}",
                        ConsoleFormatter::format_scores(
                            scores,
                            self.use_case.catalog(),
                            &self.locale
                        )
                    )?;
                }
                Ok(Flow::Continue)
            }
            "/help" | "/h" | "/?" => {
                Self::print_commands(out)?;
                Ok(Flow::Continue)
            }
            _ => {
                writeln!(out, "Unknown command: {}", cmd)?;
                writeln!(out, "Type /help for available commands")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Read one trimmed line; `None` on end of input
    fn prompt<I: BufRead, W: Write>(
        input: &mut I,
        out: &mut W,
        prompt: &str,
    ) -> io::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_welcome<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "╭─────────────────────────────────────────────╮")?;
        writeln!(out, "│               Character Quiz                │")?;
        writeln!(out, "╰─────────────────────────────────────────────╯")?;
        writeln!(out)?;
        writeln!(out, "Answer with the number of an option.")?;
        Self::print_commands(out)
    }

    fn print_commands<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Commands:")?;
        writeln!(out, "  /scores, /s       - Show the current tallies")?;
        writeln!(out, "  /restart, /r      - Start over with new questions")?;
        writeln!(out, "  /help, /h, /?     - Show this help")?;
        writeln!(out, "  /quit, /exit, /q  - Exit")?;
        writeln!(out)
    }
}
