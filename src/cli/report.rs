//! Console output for a finished run.
//!
//! Confirmation lines go to the given writer (stdout in the binary); the
//! verbose summary goes to stderr so stdout stays stable.

use std::io::{self, Write};

use colored::Colorize;

use super::run::{RunOutcome, RunSummary};

pub const INVALID_DIRECTORY_MESSAGE: &str =
    "Error: the given path is not a directory or does not exist";

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_to<W: Write>(outcome: &RunOutcome, writer: &mut W) -> io::Result<()> {
    match outcome {
        RunOutcome::InvalidDirectory => writeln!(writer, "{}", INVALID_DIRECTORY_MESSAGE),
        RunOutcome::Written(summary) => {
            writeln!(writer, "Prompt saved to {}", summary.output.display())?;
            writeln!(writer, "Total characters: {}", summary.char_count)
        }
    }
}

/// Print collection statistics, used in verbose mode.
pub fn print_summary_to<W: Write>(summary: &RunSummary, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} Collected {} {} ({} decoded as Latin-1, {} read {}, {} skipped {})",
        SUCCESS_MARK.green(),
        summary.files_collected,
        plural(summary.files_collected, "file", "files"),
        summary.fallback_decoded,
        summary.read_errors,
        plural(summary.read_errors, "error", "errors"),
        summary.skipped_count,
        plural(summary.skipped_count, "entry", "entries"),
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
