//! Fuzz target for card and account masking.
//!
//! Tests that masking never panics and never echoes long digit runs.

#![no_main]

use bank_widget::{mask_account, mask_account_card, mask_card_number};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let _ = mask_account(data);
    let _ = mask_account_card(data);

    if let Ok(masked) = mask_card_number(data) {
        let digits = data.trim();
        assert_eq!(masked.replace(' ', "").len(), digits.len());
        assert!(masked.ends_with(&digits[digits.len() - 1..]));
    }

    if let Err(e) = mask_account_card(data) {
        let digits: String = data.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() >= 13 {
            assert!(!e.to_string().contains(&digits), "error message leaks number");
        }
    }
});
