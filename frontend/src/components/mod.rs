pub mod forms;
pub mod header;
pub mod mocard;
pub mod transactions;
