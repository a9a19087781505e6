//! Text file saving.
//!
//! Saves a buffer's lines back to disk as UTF-8 text. A save is always a
//! full overwrite, never an in-place patch, and uses an atomic write (temp
//! file in the target directory, then rename) so the target file is never
//! left in a partially written state. A failed save leaves both the on-disk
//! file and the caller's in-memory lines untouched.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves lines to a file, joined with a single `\n` separator.
///
/// No trailing newline is written; this is the other half of the round-trip
/// convention in [`loader`](crate::file::loader).
///
/// # Errors
///
/// Returns an error on any I/O fault: permissions, a missing parent
/// directory, disk full. The target file keeps its previous content.
///
/// # Examples
///
/// ```no_run
/// use linequill::file::saver::save_lines;
///
/// let lines = vec!["hello".to_string(), "world".to_string()];
/// save_lines("out.txt", &lines).unwrap();
/// ```
pub fn save_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let content = lines.join("\n");

    // Write to a sibling temp file, then rename over the target. The temp
    // file must live in the same directory for the rename to be atomic.
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?;
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&tmp_path, content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        // Don't leave the temp file behind on failure.
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("Failed to write {}", path.display()));
    }

    Ok(())
}
