//! File-backed key-value storage for native hosts.
//!
//! Library API: the browser build persists through `LocalStorageStore` and
//! never constructs this type.

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;

/// Key-value store backed by one JSON file per key inside a data directory.
///
/// This is the native-platform counterpart of browser local storage.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) a data directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        if !base_dir.exists() {
            info!("Creating data directory: {:?}", base_dir);
            fs::create_dir_all(&base_dir)
                .with_context(|| format!("failed to create data directory {:?}", base_dir))?;
        }
        Ok(Self { base_dir })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_dir
    }

    /// File that holds the value for `key`
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for_key(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {:?}", path))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for_key(key);

        // Write to a temporary file first, then move it into place
        let temp_path = path.with_extension("tmp");
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("failed to open {:?}", temp_path))?;
            file.write_all(value.as_bytes())?;
            file.flush()?;
        }
        fs::rename(&temp_path, &path)
            .with_context(|| format!("failed to move {:?} into place", temp_path))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for_key(key);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("failed to remove {:?}", path))?;
        } else {
            warn!("Nothing stored under '{}' to remove", key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_reopening_the_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        {
            let store = JsonFileStore::new(temp_dir.path())?;
            store.set("spendsense-transactions", "[]")?;
        }

        let reopened = JsonFileStore::new(temp_dir.path())?;
        assert_eq!(reopened.get("spendsense-transactions")?.as_deref(), Some("[]"));
        assert!(!reopened.path_for_key("spendsense-transactions").with_extension("tmp").exists());
        Ok(())
    }

    #[test]
    fn test_missing_key_and_remove() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = JsonFileStore::new(temp_dir.path().join("nested"))?;
        assert!(store.base_directory().exists());
        assert_eq!(store.get("absent")?, None);

        store.set("k", "value")?;
        store.remove("k")?;
        store.remove("k")?;
        assert_eq!(store.get("k")?, None);
        Ok(())
    }

    #[test]
    fn test_keys_are_sanitized_into_file_names() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = JsonFileStore::new(temp_dir.path())?;
        let path = store.path_for_key("../escape/attempt");
        assert_eq!(path.parent(), Some(temp_dir.path()));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("___escape_attempt.json"));
        Ok(())
    }
}
