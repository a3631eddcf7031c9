//! Lazy iterators over transactions and card numbers.
//!
//! # Example
//!
//! ```
//! use bank_widget::generators::{card_number_generator, TransactionIterExt};
//! use bank_widget::{Currency, Transaction};
//!
//! let txs = vec![
//!     Transaction::new(1, "EXECUTED", "2018-06-30T02:08:58.425572")
//!         .amount("9824.07", Currency::usd())
//!         .description("Перевод организации"),
//!     Transaction::new(2, "EXECUTED", "2019-03-23T01:09:46.296404")
//!         .amount("43318.34", Currency::rub())
//!         .description("Перевод со счета на счет"),
//! ];
//!
//! let usd: Vec<_> = txs.iter().filter_by_currency("USD").map(|tx| tx.id).collect();
//! assert_eq!(usd, vec![1]);
//!
//! let cards: Vec<_> = card_number_generator(1, 2).collect();
//! assert_eq!(cards, vec!["0000 0000 0000 0001", "0000 0000 0000 0002"]);
//! ```

use crate::format::{format_in_blocks, DEFAULT_BLOCK_SIZE};
use crate::transaction::Transaction;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

#[cfg(feature = "generate")]
use rand::Rng;

/// Largest number [`card_number_generator`] produces (`9999 9999 9999 9999`).
pub const MAX_CARD_NUMBER: u64 = 9_999_999_999_999_999;

/// Digits in a generated card number.
const GENERATED_CARD_DIGITS: usize = 16;

/// Yields transactions whose currency code matches.
///
/// Created by [`filter_by_currency`] or [`TransactionIterExt::filter_by_currency`].
#[derive(Debug, Clone)]
pub struct CurrencyFilter<'c, I> {
    inner: I,
    code: &'c str,
}

impl<'a, 'c, I> Iterator for CurrencyFilter<'c, I>
where
    I: Iterator<Item = &'a Transaction>,
{
    type Item = &'a Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        let code = self.code;
        self.inner
            .by_ref()
            .find(|tx| tx.currency_code() == Some(code))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<'a, 'c, I> FusedIterator for CurrencyFilter<'c, I> where I: FusedIterator<Item = &'a Transaction> {}

/// Yields the description of each transaction, `""` when it has none.
///
/// Created by [`transaction_descriptions`] or [`TransactionIterExt::descriptions`].
#[derive(Debug, Clone)]
pub struct Descriptions<I> {
    inner: I,
}

impl<'a, I> Iterator for Descriptions<I>
where
    I: Iterator<Item = &'a Transaction>,
{
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|tx| tx.description.as_deref().unwrap_or(""))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, I> ExactSizeIterator for Descriptions<I> where I: ExactSizeIterator<Item = &'a Transaction> {}

/// Yields formatted card numbers over an inclusive range.
///
/// Created by [`card_number_generator`].
#[derive(Debug, Clone)]
pub struct CardNumbers {
    range: RangeInclusive<u64>,
}

impl Iterator for CardNumbers {
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(format_card_number)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for CardNumbers {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(format_card_number)
    }
}

impl FusedIterator for CardNumbers {}

/// Filters transactions by currency code, e.g. `"USD"`.
///
/// Transactions without an amount never match.
pub fn filter_by_currency<'a, 'c, I>(transactions: I, code: &'c str) -> CurrencyFilter<'c, I::IntoIter>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    CurrencyFilter {
        inner: transactions.into_iter(),
        code,
    }
}

/// Yields the description of each transaction in turn.
///
/// # Example
///
/// ```
/// use bank_widget::generators::transaction_descriptions;
/// use bank_widget::Transaction;
///
/// let txs = vec![
///     Transaction::new(1, "EXECUTED", "2019-04-04T23:20:05.206878").description("Перевод с карты на карту"),
///     Transaction::new(2, "EXECUTED", "2019-04-04T23:20:05.206878"),
/// ];
/// let descriptions: Vec<_> = transaction_descriptions(&txs).collect();
/// assert_eq!(descriptions, vec!["Перевод с карты на карту", ""]);
/// ```
pub fn transaction_descriptions<'a, I>(transactions: I) -> Descriptions<I::IntoIter>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    Descriptions {
        inner: transactions.into_iter(),
    }
}

/// Generates card numbers from `start` to `end` inclusive, each zero-padded to
/// 16 digits and grouped as `XXXX XXXX XXXX XXXX`.
///
/// Yields nothing when `start > end`. `end` is capped at [`MAX_CARD_NUMBER`].
///
/// # Example
///
/// ```
/// use bank_widget::generators::card_number_generator;
///
/// let cards: Vec<_> = card_number_generator(10, 10).collect();
/// assert_eq!(cards, vec!["0000 0000 0000 0010"]);
/// assert_eq!(card_number_generator(5, 1).count(), 0);
/// ```
pub fn card_number_generator(start: u64, end: u64) -> CardNumbers {
    CardNumbers {
        range: start..=end.min(MAX_CARD_NUMBER),
    }
}

/// Formats a number as a 16-digit grouped card number.
fn format_card_number(number: u64) -> String {
    let digits = format!("{:0width$}", number, width = GENERATED_CARD_DIGITS);
    format_in_blocks(&digits, DEFAULT_BLOCK_SIZE)
}

/// Yields random card numbers in the [`card_number_generator`] format.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
#[derive(Debug, Clone)]
pub struct RandomCardNumbers<R> {
    rng: R,
    remaining: usize,
}

#[cfg(feature = "generate")]
impl<R: Rng> Iterator for RandomCardNumbers<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(format_card_number(self.rng.gen_range(0..=MAX_CARD_NUMBER)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(feature = "generate")]
impl<R: Rng> ExactSizeIterator for RandomCardNumbers<R> {}

/// Generates `count` random card numbers using the thread-local RNG.
///
/// Requires the `generate` feature.
///
/// # Example
///
/// ```
/// use bank_widget::generators::random_card_number_generator;
///
/// let cards: Vec<_> = random_card_number_generator(5).collect();
/// assert_eq!(cards.len(), 5);
/// assert!(cards.iter().all(|c| c.len() == 19));
/// ```
#[cfg(feature = "generate")]
pub fn random_card_number_generator(count: usize) -> RandomCardNumbers<rand::rngs::ThreadRng> {
    random_card_numbers_with_rng(count, rand::thread_rng())
}

/// Generates `count` random card numbers from the given RNG.
///
/// Useful for reproducible output with a seeded RNG.
#[cfg(feature = "generate")]
pub fn random_card_numbers_with_rng<R: Rng>(count: usize, rng: R) -> RandomCardNumbers<R> {
    RandomCardNumbers {
        rng,
        remaining: count,
    }
}

/// Extension trait adding transaction adapters to iterators over `&Transaction`.
pub trait TransactionIterExt<'a>: Iterator<Item = &'a Transaction> + Sized {
    /// Keeps only transactions in the given currency.
    fn filter_by_currency(self, code: &str) -> CurrencyFilter<'_, Self>;

    /// Maps each transaction to its description.
    fn descriptions(self) -> Descriptions<Self>;
}

impl<'a, I> TransactionIterExt<'a> for I
where
    I: Iterator<Item = &'a Transaction> + Sized,
{
    #[inline]
    fn filter_by_currency(self, code: &str) -> CurrencyFilter<'_, Self> {
        CurrencyFilter { inner: self, code }
    }

    #[inline]
    fn descriptions(self) -> Descriptions<Self> {
        Descriptions { inner: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Currency;

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(939719570, "EXECUTED", "2018-06-30T02:08:58.425572")
                .amount("9824.07", Currency::usd())
                .description("Перевод организации")
                .from_party("Счет 75106830613657916952")
                .to_party("Счет 11776614605963066702"),
            Transaction::new(142264268, "EXECUTED", "2019-04-04T23:20:05.206878")
                .amount("79114.93", Currency::usd())
                .description("Перевод со счета на счет"),
            Transaction::new(873106923, "EXECUTED", "2019-03-23T01:09:46.296404")
                .amount("43318.34", Currency::rub())
                .description("Перевод со счета на счет"),
            Transaction::new(895315941, "EXECUTED", "2018-08-19T04:27:37.904916")
                .description("Перевод с карты на карту"),
        ]
    }

    #[test]
    fn test_filter_by_currency() {
        let txs = sample_transactions();
        let usd: Vec<u64> = filter_by_currency(&txs, "USD").map(|tx| tx.id).collect();
        assert_eq!(usd, vec![939719570, 142264268]);

        let rub: Vec<u64> = filter_by_currency(&txs, "RUB").map(|tx| tx.id).collect();
        assert_eq!(rub, vec![873106923]);
    }

    #[test]
    fn test_filter_by_currency_no_match() {
        let txs = sample_transactions();
        assert_eq!(filter_by_currency(&txs, "EUR").count(), 0);
        let empty: Vec<Transaction> = Vec::new();
        assert_eq!(filter_by_currency(&empty, "USD").count(), 0);
    }

    #[test]
    fn test_filter_by_currency_is_lazy() {
        let txs = sample_transactions();
        let mut usd = txs.iter().filter_by_currency("USD");
        assert_eq!(usd.next().map(|tx| tx.id), Some(939719570));
        assert_eq!(usd.next().map(|tx| tx.id), Some(142264268));
        assert!(usd.next().is_none());
        assert!(usd.next().is_none());
    }

    #[test]
    fn test_descriptions() {
        let txs = sample_transactions();
        let descriptions: Vec<&str> = txs.iter().descriptions().collect();
        assert_eq!(
            descriptions,
            vec![
                "Перевод организации",
                "Перевод со счета на счет",
                "Перевод со счета на счет",
                "Перевод с карты на карту",
            ]
        );
        assert_eq!(txs.iter().descriptions().len(), 4);
    }

    #[test]
    fn test_descriptions_missing() {
        let txs = vec![Transaction::default()];
        assert_eq!(transaction_descriptions(&txs).collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_card_number_generator() {
        let cards: Vec<String> = card_number_generator(1, 5).collect();
        assert_eq!(
            cards,
            vec![
                "0000 0000 0000 0001",
                "0000 0000 0000 0002",
                "0000 0000 0000 0003",
                "0000 0000 0000 0004",
                "0000 0000 0000 0005",
            ]
        );
    }

    #[test]
    fn test_card_number_generator_edges() {
        assert_eq!(
            card_number_generator(0, 2).collect::<Vec<_>>(),
            vec!["0000 0000 0000 0000", "0000 0000 0000 0001", "0000 0000 0000 0002"]
        );
        assert_eq!(
            card_number_generator(1000, 1001).collect::<Vec<_>>(),
            vec!["0000 0000 0000 1000", "0000 0000 0000 1001"]
        );
        assert_eq!(card_number_generator(3, 2).count(), 0);
    }

    #[test]
    fn test_card_number_generator_caps_at_max() {
        let cards: Vec<String> = card_number_generator(MAX_CARD_NUMBER, u64::MAX).collect();
        assert_eq!(cards, vec!["9999 9999 9999 9999"]);
    }

    #[test]
    fn test_card_number_generator_reverse() {
        let last = card_number_generator(1, 5).next_back();
        assert_eq!(last.as_deref(), Some("0000 0000 0000 0005"));
        assert_eq!(card_number_generator(1, 5).count(), 5);
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_random_card_numbers_shape() {
        let cards: Vec<String> = random_card_number_generator(5).collect();
        assert_eq!(cards.len(), 5);
        for card in cards {
            assert_eq!(card.len(), 19);
            for (i, c) in card.chars().enumerate() {
                if i == 4 || i == 9 || i == 14 {
                    assert_eq!(c, ' ');
                } else {
                    assert!(c.is_ascii_digit());
                }
            }
        }
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_random_card_numbers_seeded() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let a: Vec<String> = random_card_numbers_with_rng(3, StdRng::seed_from_u64(7)).collect();
        let b: Vec<String> = random_card_numbers_with_rng(3, StdRng::seed_from_u64(7)).collect();
        assert_eq!(a, b);
        assert_eq!(random_card_number_generator(0).count(), 0);
    }
}
