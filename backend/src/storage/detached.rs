use anyhow::Result;
use log::debug;

use super::traits::KeyValueStore;

/// Storage capability for platforms without persistence.
///
/// Reads always come back empty and writes are dropped, so the record store
/// still hands back constructed records but nothing survives a reload.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedStore;

impl KeyValueStore for DetachedStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!("Detached storage dropped {} bytes for '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}
