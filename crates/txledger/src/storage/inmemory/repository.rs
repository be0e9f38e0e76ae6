//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use txledger_core::storage::{RepositoryError, Result, TransactionRepository};
use txledger_core::transaction::Transaction;

/// In-memory storage backend for testing.
///
/// Uses a HashMap keyed by `(user_id, id)` wrapped in `Arc<RwLock<_>>` for
/// thread-safe access. Data is not persisted and will be lost when the
/// repository is dropped. Semantics match the DynamoDB backend: silent
/// upserts, the `NotFound` sentinel on point lookups, and an empty vector
/// for unknown users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionRepository {
    transactions: Arc<RwLock<HashMap<(String, String), Transaction>>>,
}

impl InMemoryTransactionRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn get_transactions_by_user_id(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_transaction_by_id(
        &self,
        user_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let transactions = self.transactions.read().await;
        transactions
            .get(&(user_id.to_string(), transaction_id.to_string()))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn add_transaction(&self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        transactions.insert(
            (transaction.user_id.clone(), transaction.id.clone()),
            transaction.clone(),
        );
        Ok(())
    }
}
