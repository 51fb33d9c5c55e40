pub mod transaction_table;
pub mod transactions_page;

pub use transaction_table::TransactionTable;
pub use transactions_page::TransactionsPage;
