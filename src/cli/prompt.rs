//! Interactive questions on stdin.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

pub const DIRECTORY_QUESTION: &str = "Enter the directory to scan: ";
pub const SUFFIX_QUESTION: &str = "Enter the file suffix to collect (e.g. .java .txt .md): ";

/// Print `question`, read one line and return it with surrounding
/// whitespace trimmed.
pub fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("Failed to read answer from stdin")?;
    if read == 0 {
        bail!("stdin closed before answering: {}", question.trim_end());
    }

    Ok(answer.trim().to_string())
}
