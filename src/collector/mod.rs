//! Directory collection: walk a tree, pick files by suffix, and concatenate
//! their contents behind a delimiter line naming each file.

pub mod decode;

use std::{cmp::Ordering, ffi::OsStr, fmt::Write, path::Path};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

use decode::{Encoding, read_text};

/// Result of collecting a directory tree.
#[derive(Debug, Default)]
pub struct CollectResult {
    pub text: String,
    pub files_collected: usize,
    /// Files that were not valid UTF-8 and were decoded as Latin-1.
    pub fallback_decoded: usize,
    /// Files whose content was replaced by an inline error line.
    pub read_errors: usize,
    /// Walk entries below the root that could not be accessed.
    pub skipped_count: usize,
}

/// Collect every file under `root` whose name ends with `suffix`.
///
/// Per-file failures never abort the walk; they show up inline in the
/// returned text. `root` is expected to be an existing directory.
pub fn collect(root: &Path, suffix: &str) -> String {
    collect_files(root, suffix, false).text
}

pub fn collect_files(root: &Path, suffix: &str, verbose: bool) -> CollectResult {
    let mut result = CollectResult::default();

    for entry in WalkDir::new(root).sort_by(compare_entries) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        // Directories are descended into by the walker; symlinked ones are not followed.
        let path = entry.path();
        if path.is_dir() || !matches_suffix(entry.file_name(), suffix) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        push_delimiter(&mut result.text, relative);
        result.files_collected += 1;

        match read_text(path) {
            Ok(decoded) => {
                if decoded.encoding == Encoding::Latin1 {
                    result.fallback_decoded += 1;
                    if verbose {
                        eprintln!(
                            "{} {} is not valid UTF-8, decoded as Latin-1",
                            "warning:".bold().yellow(),
                            relative.display()
                        );
                    }
                }
                result.text.push_str(&decoded.text);
            }
            Err(e) => {
                result.read_errors += 1;
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        relative.display(),
                        e
                    );
                }
                // Writing into a String cannot fail.
                let _ = writeln!(result.text, "// ERROR reading file: {}", e);
            }
        }
    }

    result
}

/// Exact trailing-substring match on the raw file name.
///
/// This is not an extension check: suffix `java` matches both `Main.java`
/// and `Main.xjava`, and the empty suffix matches every name.
pub fn matches_suffix(file_name: &OsStr, suffix: &str) -> bool {
    file_name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

fn push_delimiter(text: &mut String, relative: &Path) {
    let _ = write!(text, "\n\n// ====== FILE: {} ======\n\n", relative.display());
}

/// Files before subdirectories, then by name, so a directory's own files
/// precede the contents of its children.
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
