pub mod use_card_export;
pub mod use_transactions;
