use std::process::ExitCode;

/// Exit status for the CLI.
///
/// An invalid scan directory is reported but still exits with `Success`;
/// only unexpected failures (closed stdin, unwritable output) map to `Error`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run finished, whether or not an output file was produced.
    Success,
    /// Run failed due to an internal error (I/O on stdin or the output file).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
