//! Splitting logcat output into error blocks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Logcat `threadtime` prefix, e.g. `05-12 10:31:02.114`.
    static ref LOGCAT_TIMESTAMP: Regex =
        Regex::new(r"^\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d+").unwrap();
}

fn is_boundary(line: &str) -> bool {
    line.trim().is_empty() || LOGCAT_TIMESTAMP.is_match(line)
}

fn opens_block(line: &str) -> bool {
    line.contains("Exception") || line.contains("Error")
}

/// Groups `content` into error blocks.
///
/// A blank line or a timestamped line closes the open block. A line joins
/// the open block, or opens a new one when it mentions `Exception` or
/// `Error`. When nothing qualifies, every line is returned as its own block
/// so callers still have something to search.
pub fn split_error_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if is_boundary(line) && !current.is_empty() {
            blocks.push(current.join("\n"));
            current.clear();
        }
        if opens_block(line) || !current.is_empty() {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    if blocks.is_empty() {
        tracing::debug!("no error blocks found, falling back to individual lines");
        return content.lines().map(str::to_string).collect();
    }
    blocks
}
