//! Batch masking and date formatting.
//!
//! Every function here is a per-item map: one failing item never affects
//! the others, and results come back in input order. With the `parallel`
//! feature the work can be spread over rayon's thread pool.

use crate::error::MaskError;
use crate::widget::{format_date, mask_account_card};

/// Masks each labeled identifier with [`mask_account_card`].
///
/// # Example
///
/// ```
/// use bank_widget::batch::mask_all;
///
/// let results = mask_all(&["Visa Platinum 7000792289606361", "Visa", "Счет 73654108430135874305"]);
/// assert_eq!(results[0].as_deref(), Ok("Visa Platinum 7000 79** **** 6361"));
/// assert!(results[1].is_err());
/// assert_eq!(results[2].as_deref(), Ok("Счет **4305"));
/// ```
pub fn mask_all<S: AsRef<str>>(inputs: &[S]) -> Vec<Result<String, MaskError>> {
    inputs
        .iter()
        .map(|input| mask_account_card(input.as_ref()))
        .collect()
}

/// Formats each ISO timestamp with [`format_date`].
pub fn format_all_dates<S: AsRef<str>>(dates: &[S]) -> Vec<Result<String, MaskError>> {
    dates.iter().map(|date| format_date(date.as_ref())).collect()
}

/// Counts identifiers that mask successfully and ones that fail.
///
/// # Returns
///
/// Tuple of (masked_count, failed_count)
pub fn count_masked<S: AsRef<str>>(inputs: &[S]) -> (usize, usize) {
    let mut masked = 0;
    let mut failed = 0;

    for input in inputs {
        if mask_account_card(input.as_ref()).is_ok() {
            masked += 1;
        } else {
            failed += 1;
        }
    }

    (masked, failed)
}

/// Masks identifiers in parallel using rayon.
///
/// Returns the same results, in the same order, as [`mask_all`].
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn par_mask_all<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<Result<String, MaskError>> {
    use rayon::prelude::*;
    inputs
        .par_iter()
        .map(|input| mask_account_card(input.as_ref()))
        .collect()
}

/// Formats timestamps in parallel using rayon.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn par_format_all_dates<S: AsRef<str> + Sync>(dates: &[S]) -> Vec<Result<String, MaskError>> {
    use rayon::prelude::*;
    dates.par_iter().map(|date| format_date(date.as_ref())).collect()
}
