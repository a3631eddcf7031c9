//! # bank_widget
//!
//! Display helpers for bank transaction data: card and account number
//! masking, ISO date formatting, transaction filtering and ordering, card
//! number generators, and conversion of amounts to rubles.
//!
//! ## Quick Start
//!
//! ```rust
//! use bank_widget::{format_date, mask_account_card};
//!
//! assert_eq!(
//!     mask_account_card("Visa Platinum 7000792289606361").unwrap(),
//!     "Visa Platinum 7000 79** **** 6361"
//! );
//! assert_eq!(mask_account_card("Счет 73654108430135874305").unwrap(), "Счет **4305");
//! assert_eq!(format_date("2024-03-11T02:26:18.671407").unwrap(), "11.03.2024");
//! ```
//!
//! ## Masking Rules
//!
//! | Input | Digits | Output |
//! |-------|--------|--------|
//! | Card | 16 | `XXXX XX** **** XXXX` |
//! | Card | 13-15, 17-19 | first 6 + `*` + last 4, in blocks of 4 |
//! | Account | any | `**` + last 4 |
//!
//! ```rust
//! use bank_widget::{mask_account, mask_card_number, MaskError};
//!
//! assert_eq!(mask_card_number(1234567890123456u64).unwrap(), "1234 56** **** 3456");
//! assert_eq!(mask_card_number("1234567890123").unwrap(), "1234 56** *012 3");
//! assert_eq!(mask_account(321u32).unwrap(), "**321");
//!
//! assert!(matches!(
//!     mask_card_number("123456789012"),
//!     Err(MaskError::InvalidLength { length: 12, .. })
//! ));
//! ```
//!
//! ## Processing
//!
//! ```rust
//! use bank_widget::processing::{filter_by_state, sort_by_date, DEFAULT_STATE};
//! use bank_widget::Transaction;
//!
//! let txs = vec![
//!     Transaction::new(1, "EXECUTED", "2019-07-03T18:35:29.512364"),
//!     Transaction::new(2, "CANCELED", "2018-09-12T21:27:25.241689"),
//!     Transaction::new(3, "EXECUTED", "2019-08-26T10:50:58.294041"),
//! ];
//!
//! let newest_first = sort_by_date(&filter_by_state(&txs, DEFAULT_STATE), true);
//! assert_eq!(newest_first.iter().map(|tx| tx.id).collect::<Vec<_>>(), vec![3, 1]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `json` | Load transactions from JSON files |
//! | `generate` | Random card number generator |
//! | `parallel` | Rayon-based batch masking |
//! | `convert` | HTTP client for the currency rate API |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - Normalized card and account numbers are zeroed when dropped
//! - Error messages and `Debug` output never contain the full number
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod calllog;
pub mod convert;
pub mod error;
pub mod format;
pub mod generators;
pub mod input;
#[cfg(feature = "json")]
pub mod loader;
pub mod mask;
pub mod processing;
pub mod transaction;
pub mod widget;

// Re-export main types at crate root
pub use error::{MaskError, Subject};
pub use input::{CanonicalNumber, NumberInput};
pub use mask::{mask_account, mask_card_number, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use transaction::{Currency, OperationAmount, Transaction};
pub use widget::{format_date, mask_account_card, parse_date, render_transaction, ACCOUNT_MARKER};
