//! Output formatting for questions, tallies and results

pub mod console;
