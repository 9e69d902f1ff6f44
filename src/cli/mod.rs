use std::io::{self, Write};

use anyhow::Result;

pub mod args;
mod exit_status;
pub mod prompt;
pub mod report;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use run::{RunOptions, RunOutcome};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let options = RunOptions::resolve(args, &mut stdin, &mut stdout)?;
    let outcome = run::run(&options)?;

    report::print_to(&outcome, &mut stdout)?;
    stdout.flush()?;

    if let (RunOutcome::Written(summary), true) = (&outcome, options.verbose) {
        report::print_summary_to(summary, &mut io::stderr().lock())?;
    }

    Ok(ExitStatus::Success)
}
