//! Month and free-text filters over the transaction dataset.

use crate::transaction::{Transaction, month_name};

/// The month to use when a request does not specify one.
pub const DEFAULT_MONTH: &str = "March";

/// Keep the transactions whose sale month is named `month`, e.g., "March".
///
/// The comparison is case-sensitive, so "march" or an unknown month name
/// results in an empty list. Order is preserved.
pub fn filter_by_month(transactions: Vec<Transaction>, month: &str) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|transaction| transaction.sale_month().map(month_name) == Some(month))
        .collect()
}

/// Keep the transactions that mention `search` in their title, description,
/// category or price.
///
/// Text fields are matched case-insensitively, the price is matched against
/// its decimal string. An empty `search` returns `transactions` unchanged.
pub fn filter_by_search(transactions: Vec<Transaction>, search: &str) -> Vec<Transaction> {
    if search.is_empty() {
        return transactions;
    }

    let search = search.to_lowercase();

    transactions
        .into_iter()
        .filter(|transaction| matches_search(transaction, &search))
        .collect()
}

/// `search` must already be lowercase.
fn matches_search(transaction: &Transaction, search: &str) -> bool {
    transaction.title.to_lowercase().contains(search)
        || transaction.description.to_lowercase().contains(search)
        || transaction.category.to_lowercase().contains(search)
        || transaction.price_text().contains(search)
}
