//! Card and account number masking for display.
//!
//! Card numbers keep the first 6 and last 4 digits visible; a 16-digit card
//! is rendered with the fixed layout `XXXX XX** **** XXXX`, other lengths are
//! masked in the middle and then split into blocks of 4 (so 13- and 19-digit
//! cards end with a short block). Account numbers only keep the last 4 digits.
//!
//! # Example
//!
//! ```
//! use bank_widget::mask::{mask_account, mask_card_number};
//!
//! assert_eq!(mask_card_number("7000792289606361").unwrap(), "7000 79** **** 6361");
//! assert_eq!(mask_card_number(1234567890123456u64).unwrap(), "1234 56** **** 3456");
//! assert_eq!(mask_account("73654108430135874305").unwrap(), "**4305");
//! ```

use crate::error::{MaskError, Subject};
use crate::format::{format_in_blocks, is_all_digits, DEFAULT_BLOCK_SIZE};
use crate::input::NumberInput;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Card number length that uses the fixed `XXXX XX** **** XXXX` layout.
pub const STANDARD_CARD_DIGITS: usize = 16;

/// Leading digits left visible on a card number.
const VISIBLE_PREFIX: usize = 6;

/// Trailing digits left visible on card and account numbers.
const VISIBLE_SUFFIX: usize = 4;

/// Placeholder character for hidden digits.
pub const MASK_CHAR: char = '*';

/// Prefix of every masked account number.
pub const ACCOUNT_MASK_PREFIX: &str = "**";

/// Masks a card number given as an integer or a string.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`MaskError::InvalidFormat`] if anything other than digits remains
///   after trimming (checked first).
/// - [`MaskError::InvalidLength`] if the digit count is outside 13..=19.
///
/// # Example
///
/// ```
/// use bank_widget::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("1234567890123").unwrap(), "1234 56** *012 3");
/// assert_eq!(mask_card_number("1234567890123456789").unwrap(), "1234 56** **** ***6 789");
/// assert!(mask_card_number("1234abcd5678efgh").is_err());
/// ```
pub fn mask_card_number<'a>(card_number: impl Into<NumberInput<'a>>) -> Result<String, MaskError> {
    let canonical = card_number.into().canonicalize();
    let digits = canonical.as_str();

    if !is_all_digits(digits) {
        return Err(MaskError::invalid_format(Subject::CardNumber));
    }

    let len = digits.len();
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&len) {
        return Err(MaskError::invalid_length(len));
    }

    let last_four = &digits[len - VISIBLE_SUFFIX..];

    if len == STANDARD_CARD_DIGITS {
        return Ok(format!(
            "{} {}** **** {}",
            &digits[..4],
            &digits[4..VISIBLE_PREFIX],
            last_four
        ));
    }

    let middle_count = len.saturating_sub(VISIBLE_PREFIX + VISIBLE_SUFFIX);
    let mut raw = String::with_capacity(len);
    raw.push_str(&digits[..VISIBLE_PREFIX]);
    raw.extend(std::iter::repeat(MASK_CHAR).take(middle_count));
    raw.push_str(last_four);

    Ok(format_in_blocks(&raw, DEFAULT_BLOCK_SIZE))
}

/// Masks an account number given as an integer or a string.
///
/// The result is `"**"` followed by the last 4 digits, or by the whole
/// number when it has fewer than 4 digits. No block formatting is applied.
///
/// # Errors
///
/// [`MaskError::InvalidFormat`] if anything other than digits remains after
/// trimming.
///
/// # Example
///
/// ```
/// use bank_widget::mask::mask_account;
///
/// assert_eq!(mask_account(123456789u32).unwrap(), "**6789");
/// assert_eq!(mask_account(321u32).unwrap(), "**321");
/// ```
pub fn mask_account<'a>(account_number: impl Into<NumberInput<'a>>) -> Result<String, MaskError> {
    let canonical = account_number.into().canonicalize();
    let digits = canonical.as_str();

    if !is_all_digits(digits) {
        return Err(MaskError::invalid_format(Subject::AccountNumber));
    }

    let tail = &digits[digits.len().saturating_sub(VISIBLE_SUFFIX)..];

    let mut masked = String::with_capacity(ACCOUNT_MASK_PREFIX.len() + tail.len());
    masked.push_str(ACCOUNT_MASK_PREFIX);
    masked.push_str(tail);
    Ok(masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_card_16_digits() {
        assert_eq!(
            mask_card_number("1234567890123456").unwrap(),
            "1234 56** **** 3456"
        );
        assert_eq!(
            mask_card_number("7000792289606361").unwrap(),
            "7000 79** **** 6361"
        );
    }

    #[test]
    fn test_mask_card_integer_input() {
        assert_eq!(
            mask_card_number(1234567890123456u64).unwrap(),
            mask_card_number("1234567890123456").unwrap()
        );
        assert_eq!(
            mask_card_number(1234567890123456789u64).unwrap(),
            "1234 56** **** ***6 789"
        );
    }

    #[test]
    fn test_mask_signed_integer_input() {
        assert_eq!(
            mask_card_number(1234567890123456i64).unwrap(),
            "1234 56** **** 3456"
        );
        assert_eq!(
            mask_card_number(-1234567890123456i64).unwrap_err(),
            MaskError::invalid_format(Subject::CardNumber)
        );
        assert_eq!(mask_account(-123).unwrap_err(), MaskError::invalid_format(Subject::AccountNumber));
        assert_eq!(mask_account(4305).unwrap(), "**4305");
    }

    #[test]
    fn test_mask_card_13_digits() {
        assert_eq!(mask_card_number("1234567890123").unwrap(), "1234 56** *012 3");
    }

    #[test]
    fn test_mask_card_15_digits() {
        // 6 + 5 masked + 4
        assert_eq!(mask_card_number("378282246310005").unwrap(), "3782 82** ***0 005");
    }

    #[test]
    fn test_mask_card_19_digits() {
        assert_eq!(
            mask_card_number("1234567890123456789").unwrap(),
            "1234 56** **** ***6 789"
        );
    }

    #[test]
    fn test_mask_card_surrounding_whitespace() {
        assert_eq!(
            mask_card_number(" 1234567890123456 ").unwrap(),
            "1234 56** **** 3456"
        );
    }

    #[test]
    fn test_mask_card_non_digits() {
        let err = mask_card_number("1234abcd5678efgh").unwrap_err();
        assert_eq!(err, MaskError::invalid_format(Subject::CardNumber));
        assert!(err.to_string().contains("digits only"));

        // Internal spaces are not stripped
        assert!(matches!(
            mask_card_number("1234 5678 9012 3456"),
            Err(MaskError::InvalidFormat { .. })
        ));
        assert!(matches!(mask_card_number(""), Err(MaskError::InvalidFormat { .. })));
    }

    #[test]
    fn test_format_checked_before_length() {
        // Too short and non-digit: format wins
        assert!(matches!(mask_card_number("12ab"), Err(MaskError::InvalidFormat { .. })));
    }

    #[test]
    fn test_mask_card_length_bounds() {
        let err = mask_card_number("123456789012").unwrap_err();
        assert_eq!(
            err,
            MaskError::InvalidLength {
                length: 12,
                minimum: 13,
                maximum: 19
            }
        );
        assert!(err.to_string().contains("13 to 19"));

        let err = mask_card_number("12345678901234567890").unwrap_err();
        match err {
            MaskError::InvalidLength { length, .. } => assert_eq!(length, 20),
            _ => panic!("Expected InvalidLength"),
        }
    }

    #[test]
    fn test_mask_card_never_exposes_number() {
        for len in MIN_CARD_DIGITS..=MAX_CARD_DIGITS {
            let card: String = "9876543210987654321"[..len].to_string();
            let masked = mask_card_number(card.as_str()).unwrap();
            assert!(!masked.replace(' ', "").contains(&card));
            assert!(masked.contains(MASK_CHAR));
        }
    }

    #[test]
    fn test_mask_account() {
        assert_eq!(mask_account("73654108430135874305").unwrap(), "**4305");
        assert_eq!(mask_account(12345678901234567890u64).unwrap(), "**7890");
        assert_eq!(mask_account(" 12345678901234567890 ").unwrap(), "**7890");
        assert_eq!(mask_account("1234").unwrap(), "**1234");
    }

    #[test]
    fn test_mask_short_account() {
        assert_eq!(mask_account("123").unwrap(), "**123");
        assert_eq!(mask_account(7u8).unwrap(), "**7");
    }

    #[test]
    fn test_mask_account_non_digits() {
        let err = mask_account("12345abcd67890").unwrap_err();
        assert_eq!(err, MaskError::invalid_format(Subject::AccountNumber));
        assert!(err.to_string().contains("digits only"));
        assert!(mask_account("").is_err());
    }
}
