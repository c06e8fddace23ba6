//! Word list loading utilities
//!
//! Reads raw word list lines from files. Filtering to legal words happens in
//! [`WordCatalog::build`](super::WordCatalog::build).

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load raw lines from a word list file
///
/// Line terminators (`\n` and `\r\n`) are stripped; nothing else is altered.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_game::wordlists::loader::load_from_file;
///
/// let lines = load_from_file("data/targets.txt").unwrap();
/// println!("Read {} lines", lines.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "read word list");

    Ok(lines)
}
