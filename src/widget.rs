//! Display helpers for transaction fields.
//!
//! [`mask_account_card`] masks a `from`/`to` field such as
//! `"Visa Platinum 7000792289606361"` or `"Счет 73654108430135874305"`, and
//! [`format_date`] turns an ISO-8601 timestamp into `DD.MM.YYYY`.
//!
//! # Example
//!
//! ```
//! use bank_widget::widget::{format_date, mask_account_card};
//!
//! assert_eq!(
//!     mask_account_card("Visa Platinum 7000792289606361").unwrap(),
//!     "Visa Platinum 7000 79** **** 6361"
//! );
//! assert_eq!(mask_account_card("Счет 73654108430135874305").unwrap(), "Счет **4305");
//! assert_eq!(format_date("2024-03-11T02:26:18.671407").unwrap(), "11.03.2024");
//! ```

use crate::error::{MaskError, Subject};
use crate::mask::{mask_account, mask_card_number};
use crate::transaction::Transaction;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

/// First word that marks an account (rather than a card) identifier.
pub const ACCOUNT_MARKER: &str = "Счет";

/// Output layout of [`format_date`].
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Accepted date-time layouts, tried in order after the date prefix check.
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Masks the number in a labeled card or account identifier.
///
/// - `"Счет <digits>"`: everything after the marker is joined (internal
///   spaces removed) and masked as an account: `"Счет **4305"`.
/// - `"<label> <digits>"`: the last token is masked as a card number and
///   the label before it is echoed with single spaces.
///
/// # Errors
///
/// - [`MaskError::InvalidFormat`] if the input has fewer than two
///   whitespace-separated tokens.
/// - Any error from [`mask_card_number`] or [`mask_account`], unchanged.
///
/// # Example
///
/// ```
/// use bank_widget::widget::mask_account_card;
///
/// assert_eq!(mask_account_card("Maestro 1596837868705199").unwrap(), "Maestro 1596 83** **** 5199");
/// assert_eq!(mask_account_card("Счет 1234 5678 9012 3456").unwrap(), "Счет **3456");
/// assert!(mask_account_card("Visa").is_err());
/// ```
pub fn mask_account_card(input: &str) -> Result<String, MaskError> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some((&number, label)) = parts.split_last().filter(|_| parts.len() >= 2) else {
        return Err(MaskError::invalid_format(Subject::LabeledIdentifier));
    };

    if parts[0] == ACCOUNT_MARKER {
        tracing::debug!(tokens = parts.len(), "masking account identifier");
        let account_number = parts[1..].concat();
        let masked = mask_account(account_number.as_str())?;
        return Ok(format!("{} {}", ACCOUNT_MARKER, masked));
    }

    let label = label.join(" ");
    tracing::debug!(label = %label, "masking card identifier");
    let masked = mask_card_number(number)?;
    Ok(format!("{} {}", label, masked))
}

/// Parses an ISO-8601 timestamp.
///
/// Accepted forms:
///
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DDTHH:MM`
/// - `YYYY-MM-DDTHH:MM:SS`, optionally with fractional seconds
/// - any of the above with seconds and a UTC offset (`Z`, `+03:00`); the
///   local date-time as written is returned
///
/// # Errors
///
/// [`MaskError::InvalidDateFormat`] for anything else, including the empty
/// string, dates with `/` or a space separator, and leap seconds (`:60`).
pub fn parse_date(date_string: &str) -> Result<NaiveDateTime, MaskError> {
    let invalid = || MaskError::invalid_date(date_string);

    if !has_iso_date_prefix(date_string) {
        return Err(invalid());
    }

    if date_string.len() == 10 {
        return NaiveDate::parse_from_str(date_string, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(invalid);
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(date_string, layout).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(date_string)
                .ok()
                .map(|dt| dt.naive_local())
        })
        // chrono represents a `:60` leap second as nanoseconds past 1e9
        .filter(|dt| dt.nanosecond() < 1_000_000_000)
        .ok_or_else(invalid)
}

/// Formats an ISO-8601 timestamp as `DD.MM.YYYY`, dropping the time of day.
///
/// # Errors
///
/// [`MaskError::InvalidDateFormat`] if [`parse_date`] rejects the input.
///
/// # Example
///
/// ```
/// use bank_widget::widget::format_date;
///
/// assert_eq!(format_date("2023-07-01T12:00:00").unwrap(), "01.07.2023");
/// assert!(format_date("2023/12/25 15:30:45").is_err());
/// ```
pub fn format_date(date_string: &str) -> Result<String, MaskError> {
    parse_date(date_string).map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
}

/// Renders a transaction for display.
///
/// ```text
/// 26.08.2019 Перевод организации
/// Maestro 1596 83** **** 5199 -> Счет **9589
/// ```
///
/// The second line shows only the destination when there is no source, and
/// is omitted when neither is present.
///
/// # Errors
///
/// Any error from [`format_date`] or [`mask_account_card`].
pub fn render_transaction(transaction: &Transaction) -> Result<String, MaskError> {
    let date = format_date(&transaction.date)?;
    let mut rendered = match transaction.description.as_deref() {
        Some(description) if !description.is_empty() => format!("{} {}", date, description),
        _ => date,
    };

    let from = transaction.from.as_deref().map(mask_account_card).transpose()?;
    let to = transaction.to.as_deref().map(mask_account_card).transpose()?;

    match (from, to) {
        (Some(from), Some(to)) => {
            rendered.push('\n');
            rendered.push_str(&from);
            rendered.push_str(" -> ");
            rendered.push_str(&to);
        }
        (None, Some(party)) | (Some(party), None) => {
            rendered.push('\n');
            rendered.push_str(&party);
        }
        (None, None) => {}
    }

    Ok(rendered)
}

/// Checks the `YYYY-MM-DD` prefix and that a time part, if any, starts with `T`.
fn has_iso_date_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 10 {
        return false;
    }

    let digits_at = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);

    digits_at(0..4)
        && bytes[4] == b'-'
        && digits_at(5..7)
        && bytes[7] == b'-'
        && digits_at(8..10)
        && (bytes.len() == 10 || bytes[10] == b'T')
}
