//! Digit checks and block formatting.
//!
//! # Example
//!
//! ```
//! use bank_widget::format::{format_in_blocks, is_all_digits};
//!
//! assert!(is_all_digits("7000792289606361"));
//! assert_eq!(format_in_blocks("7000792289606361", 4), "7000 7922 8960 6361");
//! assert_eq!(format_in_blocks("1234567890123", 4), "1234 5678 9012 3");
//! ```

/// Default width of a block produced by [`format_in_blocks`].
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// Returns true if `text` is non-empty and every character is `0`-`9`.
///
/// Only ASCII digits count; other Unicode digits are rejected.
///
/// # Example
///
/// ```
/// use bank_widget::format::is_all_digits;
///
/// assert!(is_all_digits("0123"));
/// assert!(!is_all_digits(""));
/// assert!(!is_all_digits("12 34"));
/// assert!(!is_all_digits("١٢٣"));
/// ```
#[inline]
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Splits `text` left to right into chunks of `block_size` characters and
/// joins them with a single space. The last chunk may be shorter.
///
/// # Panics
///
/// Panics if `block_size` is zero.
///
/// # Example
///
/// ```
/// use bank_widget::format::format_in_blocks;
///
/// assert_eq!(format_in_blocks("123456**7890", 4), "1234 56** 7890");
/// assert_eq!(format_in_blocks("abc", 4), "abc");
/// assert_eq!(format_in_blocks("", 4), "");
/// ```
pub fn format_in_blocks(text: &str, block_size: usize) -> String {
    format_in_blocks_with_separator(text, block_size, " ")
}

/// Like [`format_in_blocks`], with a custom separator between chunks.
///
/// # Panics
///
/// Panics if `block_size` is zero.
///
/// # Example
///
/// ```
/// use bank_widget::format::format_in_blocks_with_separator;
///
/// assert_eq!(format_in_blocks_with_separator("0000000000000001", 4, "-"), "0000-0000-0000-0001");
/// ```
pub fn format_in_blocks_with_separator(text: &str, block_size: usize, separator: &str) -> String {
    assert!(block_size > 0, "block size must be at least 1");

    let char_count = text.chars().count();
    let mut result =
        String::with_capacity(text.len() + (char_count / block_size) * separator.len());

    for (i, c) in text.chars().enumerate() {
        if i > 0 && i % block_size == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}
