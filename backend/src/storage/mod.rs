//! # Storage Module
//!
//! Persistence for the transaction tracker. The record store talks to a
//! [`KeyValueStore`] chosen by the platform at construction time:
//!
//! - `LocalStorageStore` (front-end crate) in the browser
//! - [`JsonFileStore`] on a native platform
//! - [`MemoryStore`] as a test fake
//! - [`DetachedStore`] when no persistence is available

pub mod detached;
pub mod file;
pub mod memory;
pub mod traits;
pub mod transaction_store;

pub use detached::DetachedStore;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
pub use transaction_store::TransactionStore;
