//! Transaction table presentation logic.
//!
//! Converts stored transactions into the strings the list view shows: money
//! from integer cents, short US dates, category labels and the row caption.

use chrono::NaiveDate;
use shared::{Category, FormattedTransaction, SpendSenseConfig, Transaction, TransactionTable};

/// Formats transactions for the list view
#[derive(Debug, Clone)]
pub struct TransactionTableService {
    currency_symbol: String,
}

impl Default for TransactionTableService {
    fn default() -> Self {
        Self::with_config(&SpendSenseConfig::default())
    }
}

impl TransactionTableService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &SpendSenseConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// Build the whole table; `transactions` are expected in display order
    pub fn build_table(&self, transactions: &[Transaction]) -> TransactionTable {
        TransactionTable {
            rows: transactions.iter().map(|t| self.format_transaction(t)).collect(),
            count_caption: Self::count_caption(transactions.len()),
        }
    }

    pub fn format_transaction(&self, transaction: &Transaction) -> FormattedTransaction {
        FormattedTransaction {
            id: transaction.id.clone(),
            formatted_date: Self::format_date(transaction.date),
            description: transaction.description.clone(),
            category_label: Self::category_label(transaction.category).to_string(),
            formatted_amount: self.format_amount(transaction.amount),
            delete_label: format!("Delete transaction: {}", transaction.description),
        }
    }

    /// "$45.50" from 4550 cents
    pub fn format_amount(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        format!("{}{}{}.{:02}", sign, self.currency_symbol, abs / 100, abs % 100)
    }

    /// "Jan 29, 2025"
    pub fn format_date(date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }

    pub fn category_label(category: Category) -> &'static str {
        category.label()
    }

    /// "1 transaction" / "3 transactions"
    pub fn count_caption(count: usize) -> String {
        format!("{} transaction{}", count, if count == 1 { "" } else { "s" })
    }

    /// Sum of all amounts in cents, saturating at the `i64` bounds
    pub fn total_cents(transactions: &[Transaction]) -> i64 {
        transactions
            .iter()
            .fold(0i64, |total, t| total.saturating_add(t.amount))
    }
}
