//! Text file loading.
//!
//! This module loads UTF-8 text files from disk into the line vector a
//! buffer is built from.
//!
//! # Trailing newline convention
//!
//! A file ending in a newline and one ending without it both load to the
//! same lines: at most one trailing `\n` is stripped before splitting, and
//! [`saver::save_lines`](crate::file::saver::save_lines) joins lines with a
//! single `\n` and writes no trailing newline. The pair round-trips exactly:
//! `load(save(lines)) == lines`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads a UTF-8 text file as a vector of lines.
///
/// # Errors
///
/// Returns an error if the path does not exist, cannot be read, or is not
/// valid UTF-8. The caller's buffer is untouched on failure.
///
/// # Examples
///
/// ```no_run
/// use linequill::file::loader::load_lines;
///
/// let lines = load_lines("notes.txt").unwrap();
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(split_content(&content))
}

/// Splits file content on line boundaries.
///
/// Strips at most one trailing newline so a conventionally-terminated file
/// does not grow a spurious empty last line.
pub fn split_content(content: &str) -> Vec<String> {
    let content = content.strip_suffix('\n').unwrap_or(content);
    content.split('\n').map(String::from).collect()
}
