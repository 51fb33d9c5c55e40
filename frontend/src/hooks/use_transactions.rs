use shared::{Transaction, TransactionInput};
use yew::prelude::*;

use crate::services::local_storage::SharedStore;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct TransactionState {
    pub transactions: Vec<Transaction>,
    /// Set when the last write could not be persisted
    pub storage_error: Option<String>,
}

pub struct UseTransactionsResult {
    pub state: TransactionState,
    pub actions: UseTransactionsActions,
}

#[derive(Clone)]
pub struct UseTransactionsActions {
    pub add_transaction: Callback<TransactionInput>,
    pub delete_transaction: Callback<String>,
    pub dismiss_storage_error: Callback<()>,
}

#[hook]
pub fn use_transactions(store: SharedStore) -> UseTransactionsResult {
    let transactions = {
        let store = store.clone();
        use_state(move || store.list())
    };
    let storage_error = use_state(|| Option::<String>::None);

    let add_transaction = {
        let store = store.clone();
        let transactions = transactions.clone();
        let storage_error = storage_error.clone();

        use_callback((), move |input: TransactionInput, _| {
            match store.add(input) {
                Ok(transaction) => {
                    Logger::info_with_component(
                        "use_transactions",
                        &format!("Added transaction {}", transaction.id),
                    );
                    storage_error.set(None);
                }
                Err(e) => {
                    Logger::error_with_component(
                        "use_transactions",
                        &format!("Failed to save transaction: {:#}", e),
                    );
                    storage_error.set(Some("Could not save the transaction".to_string()));
                }
            }
            transactions.set(store.list());
        })
    };

    let delete_transaction = {
        let store = store.clone();
        let transactions = transactions.clone();
        let storage_error = storage_error.clone();

        use_callback((), move |id: String, _| {
            if let Err(e) = store.remove(&id) {
                Logger::error_with_component(
                    "use_transactions",
                    &format!("Failed to delete transaction {}: {:#}", id, e),
                );
                storage_error.set(Some("Could not delete the transaction".to_string()));
            }
            transactions.set(store.list());
        })
    };

    let dismiss_storage_error = {
        let storage_error = storage_error.clone();
        use_callback((), move |_, _| storage_error.set(None))
    };

    UseTransactionsResult {
        state: TransactionState {
            transactions: (*transactions).clone(),
            storage_error: (*storage_error).clone(),
        },
        actions: UseTransactionsActions {
            add_transaction,
            delete_transaction,
            dismiss_storage_error,
        },
    }
}
