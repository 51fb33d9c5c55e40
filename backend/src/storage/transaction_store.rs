use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use shared::{SpendSenseConfig, Transaction, TransactionInput};
use uuid::Uuid;

use super::traits::KeyValueStore;

/// Persistent record store for transactions.
///
/// The full record set lives as one JSON array under a single key and is
/// rewritten on every mutation. `list` and `get` fail open: anything that
/// cannot be read or parsed is treated as an empty set. Mutations only fail
/// open on malformed data; a failed read aborts them.
pub struct TransactionStore<S: KeyValueStore> {
    backend: S,
    storage_key: String,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Create a store using the default storage key
    pub fn new(backend: S) -> Self {
        Self::with_config(backend, &SpendSenseConfig::default())
    }

    pub fn with_config(backend: S, config: &SpendSenseConfig) -> Self {
        Self {
            backend,
            storage_key: config.storage_key.clone(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// All transactions, newest date first
    pub fn list(&self) -> Vec<Transaction> {
        let mut transactions = self.load();
        // Stable sort: records sharing a date keep their stored order
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }

    /// Look up a single transaction
    pub fn get(&self, id: &str) -> Option<Transaction> {
        self.load().into_iter().find(|t| t.id == id)
    }

    /// Assign an id and creation time to `input`, append it, and persist the
    /// full set
    pub fn add(&self, input: TransactionInput) -> Result<Transaction> {
        let transaction =
            Transaction::from_input(input, Uuid::new_v4().to_string(), Utc::now());

        let mut transactions = self.load_for_write()?;
        transactions.push(transaction.clone());
        self.save(&transactions)?;

        info!(
            "Stored transaction {} ({} cents, {})",
            transaction.id, transaction.amount, transaction.date
        );
        Ok(transaction)
    }

    /// Delete the transaction with `id`; an unknown id is a no-op
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut transactions = self.load_for_write()?;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);

        if transactions.len() == before {
            info!("No transaction with id {} to delete", id);
            return Ok(());
        }
        self.save(&transactions)
    }

    /// Drop every stored transaction
    pub fn clear(&self) -> Result<()> {
        self.backend
            .remove(&self.storage_key)
            .with_context(|| format!("failed to clear '{}'", self.storage_key))
    }

    fn load(&self) -> Vec<Transaction> {
        match self.backend.get(&self.storage_key) {
            Ok(stored) => self.parse(stored),
            Err(e) => {
                warn!("Could not read '{}', treating as empty: {:#}", self.storage_key, e);
                Vec::new()
            }
        }
    }

    /// Current set before a mutation. A failed read is an error here so a
    /// write never replaces records that could not be read.
    fn load_for_write(&self) -> Result<Vec<Transaction>> {
        let stored = self
            .backend
            .get(&self.storage_key)
            .with_context(|| format!("failed to read '{}' before writing", self.storage_key))?;
        Ok(self.parse(stored))
    }

    fn parse(&self, stored: Option<String>) -> Vec<Transaction> {
        let stored = match stored {
            Some(stored) if !stored.trim().is_empty() => stored,
            _ => return Vec::new(),
        };

        match serde_json::from_str::<Vec<Transaction>>(&stored) {
            Ok(transactions) => transactions,
            Err(e) => {
                warn!("Malformed data under '{}', treating as empty: {}", self.storage_key, e);
                Vec::new()
            }
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string(transactions)?;
        self.backend
            .set(&self.storage_key, &json)
            .with_context(|| format!("failed to persist '{}'", self.storage_key))
    }
}
