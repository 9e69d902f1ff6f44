//! The run sequence: resolve options, validate the directory, collect, write.

use std::{
    fs,
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, default_output_path},
    prompt::{DIRECTORY_QUESTION, SUFFIX_QUESTION, ask},
};
use crate::collector::collect_files;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub directory: PathBuf,
    pub suffix: String,
    pub output: PathBuf,
    pub verbose: bool,
}

impl RunOptions {
    /// Fill in whatever the command line left out by asking on `input`.
    ///
    /// The directory is asked for before the suffix, and both questions are
    /// asked before the directory is validated.
    pub fn resolve<R: BufRead, W: Write>(
        args: Arguments,
        input: &mut R,
        prompt_out: &mut W,
    ) -> Result<Self> {
        let directory = match args.directory {
            Some(directory) => directory,
            None => PathBuf::from(ask(DIRECTORY_QUESTION, input, prompt_out)?),
        };
        let suffix = match args.suffix {
            Some(suffix) => suffix,
            None => ask(SUFFIX_QUESTION, input, prompt_out)?,
        };
        let output = args
            .output
            .unwrap_or_else(|| default_output_path(&suffix));

        Ok(Self {
            directory,
            suffix,
            output,
            verbose: args.verbose,
        })
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// The scan root is missing or not a directory; nothing was written.
    InvalidDirectory,
    Written(RunSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Length of the written text in Unicode scalar values, not bytes.
    pub char_count: usize,
    pub files_collected: usize,
    pub fallback_decoded: usize,
    pub read_errors: usize,
    pub skipped_count: usize,
}

pub fn run(options: &RunOptions) -> Result<RunOutcome> {
    if !options.directory.is_dir() {
        return Ok(RunOutcome::InvalidDirectory);
    }

    let result = collect_files(&options.directory, &options.suffix, options.verbose);

    fs::write(&options.output, &result.text).with_context(|| {
        format!("Failed to write output file: {}", options.output.display())
    })?;

    Ok(RunOutcome::Written(RunSummary {
        output: options.output.clone(),
        char_count: result.text.chars().count(),
        files_collected: result.files_collected,
        fallback_decoded: result.fallback_decoded,
        read_errors: result.read_errors,
        skipped_count: result.skipped_count,
    }))
}
