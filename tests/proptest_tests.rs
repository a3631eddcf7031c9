//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use bank_widget::format::format_in_blocks;
use bank_widget::generators::card_number_generator;
use bank_widget::{format_date, mask_account, mask_account_card, mask_card_number, MaskError};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Generates a digit string with at least one ASCII letter mixed in.
fn digits_with_letter() -> impl Strategy<Value = String> {
    (digit_string_range(0..=18), prop::char::range('a', 'z'), 0usize..=18)
        .prop_map(|(digits, letter, pos)| {
            let mut s = digits;
            let pos = pos.min(s.len());
            s.insert(pos, letter);
            s
        })
}

/// Generates a card label such as "Visa" or "Visa Platinum".
fn card_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Visa".to_string()),
        Just("Visa Platinum".to_string()),
        Just("Maestro".to_string()),
        Just("MasterCard".to_string()),
        Just("American Express".to_string()),
        "[A-Z][a-z]{2,9}",
    ]
}

// =============================================================================
// CARD MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Masking preserves the number of characters.
    #[test]
    fn masked_card_keeps_length(card in digit_string_range(13..=19)) {
        let masked = mask_card_number(card.as_str()).unwrap();
        prop_assert_eq!(masked.replace(' ', "").len(), card.len());
    }

    /// Property: The last four digits stay visible.
    #[test]
    fn masked_card_shows_last_four(card in digit_string_range(13..=19)) {
        let masked = mask_card_number(card.as_str()).unwrap();
        let compact = masked.replace(' ', "");
        prop_assert_eq!(&compact[compact.len() - 4..], &card[card.len() - 4..]);
    }

    /// Property: A 16-digit card keeps its first six digits in the fixed layout.
    #[test]
    fn masked_16_digit_card_layout(card in digit_string(16)) {
        let masked = mask_card_number(card.as_str()).unwrap();
        prop_assert_eq!(
            masked,
            format!("{} {}** **** {}", &card[..4], &card[4..6], &card[12..])
        );
    }

    /// Property: Exactly the middle digits are hidden.
    #[test]
    fn masked_card_hides_middle(card in digit_string_range(13..=19)) {
        let masked = mask_card_number(card.as_str()).unwrap();
        let stars = masked.chars().filter(|&c| c == '*').count();
        prop_assert_eq!(stars, card.len() - 10);
        prop_assert!(masked.replace(' ', "").starts_with(&card[..6]));
    }

    /// Property: Any non-digit character is a format error, whatever the length.
    #[test]
    fn non_digit_card_rejected(card in digits_with_letter()) {
        let rejected = matches!(
            mask_card_number(card.as_str()),
            Err(MaskError::InvalidFormat { .. })
        );
        prop_assert!(rejected, "expected InvalidFormat for {:?}", card);
    }

    /// Property: Digit counts just outside 13..=19 are length errors.
    #[test]
    fn out_of_range_card_rejected(card in prop_oneof![digit_string(12), digit_string(20)]) {
        let err = mask_card_number(card.as_str()).unwrap_err();
        let is_length_error = matches!(err, MaskError::InvalidLength { .. });
        prop_assert!(is_length_error, "expected InvalidLength, got {:?}", err);
        prop_assert!(err.to_string().contains("13 to 19"));
    }

    /// Property: Integer and string inputs give identical results.
    #[test]
    fn integer_and_string_card_agree(n in 1_000_000_000_000u64..=u64::MAX) {
        prop_assert_eq!(
            mask_card_number(n),
            mask_card_number(n.to_string().as_str())
        );
    }
}

// =============================================================================
// ACCOUNT MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Account masks are "**" followed by the last (up to) four digits.
    #[test]
    fn masked_account_is_prefix_and_tail(account in digit_string_range(1..=30)) {
        let tail = &account[account.len().saturating_sub(4)..];
        prop_assert_eq!(mask_account(account.as_str()).unwrap(), format!("**{}", tail));
    }

    /// Property: Integer and string account inputs agree.
    #[test]
    fn integer_and_string_account_agree(n in any::<u64>()) {
        prop_assert_eq!(
            mask_account(n).unwrap(),
            mask_account(n.to_string().as_str()).unwrap()
        );
    }

    /// Property: Non-digit accounts are rejected.
    #[test]
    fn non_digit_account_rejected(account in digits_with_letter()) {
        prop_assert!(mask_account(account.as_str()).is_err());
    }
}

// =============================================================================
// DISPATCH PROPERTIES
// =============================================================================

proptest! {
    /// Property: Card fields keep their label and mask the number.
    #[test]
    fn card_field_keeps_label(label in card_label(), card in digit_string_range(13..=19)) {
        let masked = mask_account_card(&format!("{} {}", label, card)).unwrap();
        prop_assert_eq!(masked, format!("{} {}", label, mask_card_number(card.as_str()).unwrap()));
    }

    /// Property: Account fields are masked regardless of internal spacing.
    #[test]
    fn account_field_joins_digit_groups(groups in proptest::collection::vec(digit_string_range(1..=5), 1..=5)) {
        let joined: String = groups.concat();
        let masked = mask_account_card(&format!("Счет {}", groups.join(" "))).unwrap();
        prop_assert_eq!(masked, format!("Счет {}", mask_account(joined.as_str()).unwrap()));
    }

    /// Property: Errors never echo the number back.
    #[test]
    fn errors_never_expose_number(label in card_label(), card in digit_string_range(20..=25)) {
        let msg = mask_account_card(&format!("{} {}", label, card)).unwrap_err().to_string();
        prop_assert!(!msg.contains(&card));
    }
}

// =============================================================================
// BLOCK FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Text no longer than one block is unchanged.
    #[test]
    fn short_text_unchanged(text in "[0-9*]{0,8}", extra in 0usize..4) {
        let block = text.len() + extra;
        prop_assume!(block > 0);
        prop_assert_eq!(format_in_blocks(&text, block), text);
    }

    /// Property: Removing the separators gives back the input.
    #[test]
    fn blocks_strip_back(text in "[0-9]{0,40}", block in 1usize..=8) {
        prop_assert_eq!(format_in_blocks(&text, block).replace(' ', ""), text);
    }

    /// Property: Every block but the last is full.
    #[test]
    fn blocks_are_full(text in "[0-9]{1,40}", block in 1usize..=8) {
        let formatted = format_in_blocks(&text, block);
        let parts: Vec<&str> = formatted.split(' ').collect();
        for part in &parts[..parts.len() - 1] {
            prop_assert_eq!(part.len(), block);
        }
        prop_assert!(!parts[parts.len() - 1].is_empty());
    }
}

// =============================================================================
// DATE PROPERTIES
// =============================================================================

proptest! {
    /// Property: Valid timestamps render as DD.MM.YYYY.
    #[test]
    fn date_renders_day_month_year(
        year in 1000i32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
        micros in 0u32..1_000_000,
    ) {
        let input = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}",
            year, month, day, hour, minute, second, micros
        );
        prop_assert_eq!(
            format_date(&input).unwrap(),
            format!("{:02}.{:02}.{:04}", day, month, year)
        );
    }

    /// Property: Arbitrary text never panics the date formatter.
    #[test]
    fn date_never_panics(input in ".{0,40}") {
        let _ = format_date(&input);
    }
}

// =============================================================================
// GENERATOR PROPERTIES
// =============================================================================

proptest! {
    /// Property: Generated numbers are 16 digits in four groups.
    #[test]
    fn generated_numbers_are_grouped(start in 1u64..=9_999_999_999_999_000, len in 0u64..20) {
        for card in card_number_generator(start, start + len) {
            let groups: Vec<&str> = card.split(' ').collect();
            prop_assert_eq!(groups.len(), 4);
            prop_assert!(groups.iter().all(|g| g.len() == 4 && g.bytes().all(|b| b.is_ascii_digit())));
        }
    }

    /// Property: The range is inclusive on both ends.
    #[test]
    fn generator_count_matches_range(start in 1u64..1_000_000, len in 0u64..50) {
        prop_assert_eq!(card_number_generator(start, start + len).count() as u64, len + 1);
    }
}
