//! JSON transaction loader.
//!
//! Requires the `json` feature.
//!
//! The file must contain a top-level JSON array of transaction objects (see
//! [`Transaction`] for the record layout).

use crate::transaction::Transaction;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Errors that can occur while loading transactions.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to read the file.
    Io(io::Error),
    /// The content is not valid JSON, or records have the wrong shape.
    Parse(serde_json::Error),
    /// The top-level JSON value is not an array.
    NotAnArray,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::NotAnArray => write!(f, "expected a JSON array of transactions"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::NotAnArray => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Loads transactions from a JSON file.
///
/// An empty (or whitespace-only) file yields an empty list.
///
/// # Errors
///
/// See [`LoadError`].
pub fn try_load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_transactions(&content)
}

/// Loads transactions from a reader.
pub fn try_load_transactions_from_reader<R: Read>(mut reader: R) -> Result<Vec<Transaction>, LoadError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_transactions(&content)
}

/// Parses transactions from a JSON string.
pub fn parse_transactions(json: &str) -> Result<Vec<Transaction>, LoadError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)?;
    if !value.is_array() {
        return Err(LoadError::NotAnArray);
    }

    Ok(serde_json::from_value(value)?)
}

/// Loads transactions from a JSON file, returning an empty list on any failure.
///
/// A missing file, unreadable file, invalid JSON, or a top-level value that
/// is not an array all produce `vec![]`; the reason is logged at `warn`.
///
/// # Example
///
/// ```
/// use bank_widget::loader::load_transactions;
///
/// assert!(load_transactions("no/such/operations.json").is_empty());
/// ```
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Vec<Transaction> {
    let path = path.as_ref();
    match try_load_transactions(path) {
        Ok(transactions) => {
            tracing::debug!(path = %path.display(), count = transactions.len(), "loaded transactions");
            transactions
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not load transactions");
            Vec::new()
        }
    }
}
