//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the record store run
//! against different persistence backends: browser local storage in the
//! front-end, JSON files on a native platform, or an in-memory map in tests.

use anyhow::Result;

/// A synchronous string key-value store.
///
/// This is the capability the platform hands to the record store at
/// construction. Implementations overwrite values wholesale; there is no
/// incremental update.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
