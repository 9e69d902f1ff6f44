//! CLI argument definitions using clap.
//!
//! Every argument is optional. A missing directory or suffix is asked for
//! interactively, so running the binary bare walks through both questions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan (prompted for when omitted)
    pub directory: Option<PathBuf>,

    /// File name suffix to collect, e.g. .java (prompted for when omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Output file [default: <SUFFIX>prompt.txt in the current directory]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Default output file name for a suffix, relative to the working directory.
pub fn default_output_path(suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}prompt.txt", suffix))
}
