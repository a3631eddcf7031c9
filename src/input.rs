//! Integer-or-string number input.
//!
//! Card and account numbers arrive either as integers or as text (possibly
//! with surrounding whitespace). [`NumberInput`] makes that union explicit,
//! and [`CanonicalNumber`] holds the normalized text for the duration of a
//! masking call.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A card or account number as supplied by the caller.
///
/// # Example
///
/// ```
/// use bank_widget::NumberInput;
///
/// let from_int = NumberInput::from(1234567890123456u64);
/// let from_text = NumberInput::from(" 1234567890123456 ");
/// assert_eq!(from_int.canonicalize().as_str(), from_text.canonicalize().as_str());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NumberInput<'a> {
    /// A non-negative integer.
    Integer(u128),
    /// A signed integer; a negative value keeps its `-` and fails validation.
    Signed(i128),
    /// Text; surrounding whitespace is ignored.
    Text(&'a str),
}

impl NumberInput<'_> {
    /// Converts the input to its canonical text: the decimal rendering of an
    /// integer, or the text with leading and trailing whitespace removed.
    ///
    /// No validation happens here.
    pub fn canonicalize(&self) -> CanonicalNumber {
        let text = match self {
            Self::Integer(n) => n.to_string(),
            Self::Signed(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        };
        CanonicalNumber { text }
    }
}

impl fmt::Debug for NumberInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(_) => f.write_str("NumberInput::Integer(<redacted>)"),
            Self::Signed(_) => f.write_str("NumberInput::Signed(<redacted>)"),
            Self::Text(_) => f.write_str("NumberInput::Text(<redacted>)"),
        }
    }
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberInput<'_> {
                fn from(n: $t) -> Self {
                    Self::Integer(n as u128)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<u128> for NumberInput<'_> {
    fn from(n: u128) -> Self {
        Self::Integer(n)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberInput<'_> {
                fn from(n: $t) -> Self {
                    Self::Signed(i128::from(n))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);

impl From<i128> for NumberInput<'_> {
    fn from(n: i128) -> Self {
        Self::Signed(n)
    }
}

impl From<isize> for NumberInput<'_> {
    fn from(n: isize) -> Self {
        Self::Signed(n as i128)
    }
}

/// Normalized number text, zeroed when dropped.
///
/// `Debug` output is redacted so the full number cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CanonicalNumber {
    text: String,
}

impl CanonicalNumber {
    /// Returns the canonical text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of characters (bytes, since a valid number is ASCII).
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the canonical text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Debug for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanonicalNumber")
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}
