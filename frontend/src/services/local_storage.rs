//! Browser `localStorage` as a [`KeyValueStore`].

use std::rc::Rc;

use anyhow::{anyhow, Result};
use backend::storage::{DetachedStore, KeyValueStore, TransactionStore};
use shared::SpendSenseConfig;
use web_sys::Storage;

use super::logging::Logger;

pub type SharedStore = Rc<TransactionStore<Rc<dyn KeyValueStore>>>;

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// `None` when the page has no usable `localStorage`
    pub fn detect() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| anyhow!("localStorage read failed: {:?}", e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| anyhow!("localStorage write failed: {:?}", e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| anyhow!("localStorage remove failed: {:?}", e))
    }
}

/// Open the transaction store on the best backend the page offers
pub fn open_store(config: &SpendSenseConfig) -> SharedStore {
    let backend: Rc<dyn KeyValueStore> = match LocalStorageStore::detect() {
        Some(store) => Rc::new(store),
        None => {
            Logger::warn_with_component(
                "storage",
                "localStorage unavailable; transactions will not be saved",
            );
            Rc::new(DetachedStore)
        }
    };
    Rc::new(TransactionStore::with_config(backend, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{Category, TransactionInput};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn config(storage_key: &str) -> SpendSenseConfig {
        SpendSenseConfig {
            storage_key: storage_key.to_string(),
            ..SpendSenseConfig::default()
        }
    }

    #[wasm_bindgen_test]
    fn test_malformed_value_lists_as_empty() {
        let backend = LocalStorageStore::detect().unwrap();
        backend.set("spendsense-test-malformed", "[{not json").unwrap();

        let store = open_store(&config("spendsense-test-malformed"));
        assert!(store.list().is_empty());

        store.clear().unwrap();
    }

    #[wasm_bindgen_test]
    fn test_records_survive_reopening() {
        let key = "spendsense-test-roundtrip";
        let store = open_store(&config(key));
        store.clear().unwrap();

        let added = store
            .add(TransactionInput {
                amount: 4550,
                description: "Groceries".to_string(),
                category: Category::Food,
                date: NaiveDate::from_ymd_opt(2025, 1, 29).unwrap(),
            })
            .unwrap();

        let reopened = open_store(&config(key));
        assert_eq!(reopened.list(), vec![added]);

        reopened.clear().unwrap();
        assert_eq!(LocalStorageStore::detect().unwrap().get(key).unwrap(), None);
    }
}
