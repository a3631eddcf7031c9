//! Error types for masking and date formatting.
//!
//! Messages carry the diagnostic a caller needs to report the failure
//! (the accepted range, "digits only", or the expected date format) but
//! never the card or account number itself.

use crate::mask::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use std::fmt;

/// The kind of value that failed a format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// A card number passed to the card masker.
    CardNumber,
    /// An account number passed to the account masker.
    AccountNumber,
    /// A `"<label> <number>"` string passed to the dispatcher.
    LabeledIdentifier,
}

impl Subject {
    /// Returns a human-readable name for the subject.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CardNumber => "card number",
            Self::AccountNumber => "account number",
            Self::LabeledIdentifier => "labeled identifier",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by the masking and date formatting functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The input contains characters that are not allowed, or does not have
    /// the expected `"<label> <number>"` shape.
    InvalidFormat {
        /// What was being parsed when the check failed.
        subject: Subject,
    },

    /// A card number has a digit count outside the supported range.
    InvalidLength {
        /// The actual number of digits provided.
        length: usize,
        /// The minimum accepted digit count (13).
        minimum: usize,
        /// The maximum accepted digit count (19).
        maximum: usize,
    },

    /// The date string is not an ISO-8601 timestamp.
    InvalidDateFormat {
        /// The rejected input.
        input: String,
    },
}

impl MaskError {
    pub(crate) const fn invalid_format(subject: Subject) -> Self {
        Self::InvalidFormat { subject }
    }

    pub(crate) const fn invalid_length(length: usize) -> Self {
        Self::InvalidLength {
            length,
            minimum: MIN_CARD_DIGITS,
            maximum: MAX_CARD_DIGITS,
        }
    }

    pub(crate) fn invalid_date(input: &str) -> Self {
        Self::InvalidDateFormat {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                subject: Subject::LabeledIdentifier,
            } => {
                write!(
                    f,
                    "invalid input format: expected \"<label> <number>\" or \"Счет <number>\""
                )
            }

            Self::InvalidFormat { subject } => {
                write!(f, "{} must contain digits only", subject)
            }

            Self::InvalidLength {
                length,
                minimum,
                maximum,
            } => {
                write!(
                    f,
                    "card number must have {} to {} digits, got {}",
                    minimum, maximum, length
                )
            }

            Self::InvalidDateFormat { input } => {
                write!(
                    f,
                    "invalid date format '{}': expected ISO-8601 YYYY-MM-DDTHH:MM:SS[.ffffff]",
                    input.escape_default()
                )
            }
        }
    }
}

impl std::error::Error for MaskError {}
