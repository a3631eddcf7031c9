//! Filtering and ordering of transaction lists.

use crate::transaction::{Transaction, STATE_EXECUTED};

/// State used by [`filter_by_state`] when the caller has no preference.
pub const DEFAULT_STATE: &str = STATE_EXECUTED;

/// Returns the transactions whose `state` equals `state`, in input order.
///
/// # Example
///
/// ```
/// use bank_widget::processing::{filter_by_state, DEFAULT_STATE};
/// use bank_widget::Transaction;
///
/// let txs = vec![
///     Transaction::new(1, "EXECUTED", "2023-12-25T15:30:45.123456"),
///     Transaction::new(2, "PENDING", "2023-12-26T10:15:30.654321"),
/// ];
/// let executed = filter_by_state(&txs, DEFAULT_STATE);
/// assert_eq!(executed.len(), 1);
/// assert_eq!(executed[0].id, 1);
/// ```
pub fn filter_by_state(transactions: &[Transaction], state: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.state == state)
        .cloned()
        .collect()
}

/// Returns the transactions sorted by their ISO `date` string.
///
/// `descending = true` puts the newest first. The sort is stable in both
/// directions: records with equal dates keep their input order.
///
/// # Example
///
/// ```
/// use bank_widget::processing::sort_by_date;
/// use bank_widget::Transaction;
///
/// let txs = vec![
///     Transaction::new(1, "EXECUTED", "2023-03-11T02:26:18.671407"),
///     Transaction::new(2, "EXECUTED", "2023-04-11T02:26:18.671407"),
/// ];
/// assert_eq!(sort_by_date(&txs, true)[0].id, 2);
/// assert_eq!(sort_by_date(&txs, false)[0].id, 1);
/// ```
pub fn sort_by_date(transactions: &[Transaction], descending: bool) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    if descending {
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
    } else {
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
    }
    sorted
}
