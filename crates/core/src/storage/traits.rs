use async_trait::async_trait;

use crate::transaction::Transaction;

use super::Result;

/// Repository for transaction persistence.
///
/// Any implementation honoring these signatures is interchangeable. All
/// operations are independent and safe for concurrent use; cancellation is
/// expressed by dropping the returned future, which unwinds the in-flight
/// store call.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Gets all transactions in a user's partition.
    ///
    /// Returns an empty vector when the user has no transactions; absence is
    /// not an error here. A single response page is returned.
    async fn get_transactions_by_user_id(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// Gets a single transaction by its primary key `(user_id, id)`.
    ///
    /// Fails with [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// when no item exists at that key.
    async fn get_transaction_by_id(
        &self,
        user_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction>;

    /// Persists a transaction with an unconditional put.
    ///
    /// An existing item at `(user_id, id)` is overwritten silently.
    async fn add_transaction(&self, transaction: &Transaction) -> Result<()>;
}
