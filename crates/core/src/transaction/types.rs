use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single monetary transaction belonging to a user.
///
/// `(user_id, id)` is the primary key: `user_id` is the partition key and
/// `id` the sort key. Every field is required on every persisted record.
/// Transactions are immutable once persisted; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

impl Transaction {
    /// Creates a new transaction with a generated v4 UUID id.
    pub fn new(user_id: impl Into<String>, amount: i64, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            amount,
            timestamp,
        }
    }

    /// Sets a specific ID for this transaction (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Transaction::new("user-1", 100, 1_700_000_000);
        let b = Transaction::new("user-1", 100, 1_700_000_000);
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_with_id_overrides_generated_id() {
        let tx = Transaction::new("user-1", 250, 1_700_000_000)
            .with_id("21e4e1bc-b2f8-4a47-b092-3e0c452462e0");
        assert_eq!(tx.id, "21e4e1bc-b2f8-4a47-b092-3e0c452462e0");
        assert_eq!(tx.user_id, "user-1");
        assert_eq!(tx.amount, 250);
    }
}
