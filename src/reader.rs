//! Loading the newline-delimited email list.

use crate::error::{GeneratorError, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Reads `path` fully and returns its non-empty lines in file order.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the run.
pub fn read_emails(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| GeneratorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let emails = split_emails(&String::from_utf8_lossy(&bytes));
    debug!("Read {} emails from {}", emails.len(), path.display());
    Ok(emails)
}

/// Splits on `\n` and drops empty lines.
///
/// Lines are otherwise kept verbatim: surrounding whitespace and a trailing
/// `\r` from CRLF files are part of the username.
pub fn split_emails(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
