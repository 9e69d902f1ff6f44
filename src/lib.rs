//! Promptcat - concatenate source files into a single prompt
//!
//! Promptcat walks a directory, picks every file whose name ends with a
//! given suffix, and joins their contents into one text file. Each file is
//! introduced by a delimiter comment naming its path relative to the root.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, prompting, reporting)
//! - `collector`: Directory walk, suffix matching and text decoding

pub mod cli;
pub mod collector;

pub use collector::{CollectResult, collect, collect_files};
