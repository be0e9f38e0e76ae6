//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! `Transaction` type. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use txledger_core::storage::RepositoryError;
use txledger_core::transaction::Transaction;

// ============================================================================
// Attribute names
// ============================================================================

// These are the wire contract with the store. Changing any of them is a
// breaking change against existing tables.

pub const ATTR_ID: &str = "id";
pub const ATTR_USER_ID: &str = "user_id";
pub const ATTR_AMOUNT: &str = "amount";
pub const ATTR_TIMESTAMP: &str = "timestamp";

// ============================================================================
// Transaction conversions
// ============================================================================

/// Convert a Transaction to a DynamoDB item.
pub fn transaction_to_item(transaction: &Transaction) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        ATTR_ID.to_string(),
        AttributeValue::S(transaction.id.clone()),
    );
    item.insert(
        ATTR_USER_ID.to_string(),
        AttributeValue::S(transaction.user_id.clone()),
    );
    item.insert(
        ATTR_AMOUNT.to_string(),
        AttributeValue::N(transaction.amount.to_string()),
    );
    item.insert(
        ATTR_TIMESTAMP.to_string(),
        AttributeValue::N(transaction.timestamp.to_string()),
    );

    item
}

/// Convert a DynamoDB item to a Transaction.
pub fn item_to_transaction(
    item: &HashMap<String, AttributeValue>,
) -> Result<Transaction, RepositoryError> {
    Ok(Transaction {
        id: get_string(item, ATTR_ID)?,
        user_id: get_string(item, ATTR_USER_ID)?,
        amount: get_i64(item, ATTR_AMOUNT)?,
        timestamp: get_i64(item, ATTR_TIMESTAMP)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required signed 64-bit number attribute.
fn get_i64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    n.parse::<i64>()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transaction() -> Transaction {
        Transaction {
            id: "21e4e1bc-b2f8-4a47-b092-3e0c452462e0".to_string(),
            user_id: "5a0aeb2d-36c6-4400-a7e8-60f78b8e1198".to_string(),
            amount: 200,
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_transaction_round_trip() {
        let transaction = sample_transaction();
        let item = transaction_to_item(&transaction);
        let parsed = item_to_transaction(&item).unwrap();

        assert_eq!(transaction, parsed);
    }

    #[test]
    fn test_item_uses_canonical_attribute_names() {
        let item = transaction_to_item(&sample_transaction());

        assert_eq!(
            item.get("id").unwrap().as_s().unwrap(),
            "21e4e1bc-b2f8-4a47-b092-3e0c452462e0"
        );
        assert_eq!(
            item.get("user_id").unwrap().as_s().unwrap(),
            "5a0aeb2d-36c6-4400-a7e8-60f78b8e1198"
        );
        assert_eq!(item.get("amount").unwrap().as_n().unwrap(), "200");
        assert_eq!(item.get("timestamp").unwrap().as_n().unwrap(), "1700000000");
        assert_eq!(item.len(), 4);
    }

    #[test]
    fn test_negative_amount_round_trips() {
        let mut transaction = sample_transaction();
        transaction.amount = -450;

        let item = transaction_to_item(&transaction);
        let parsed = item_to_transaction(&item).unwrap();
        assert_eq!(parsed.amount, -450);
    }

    #[test]
    fn test_item_missing_field_is_invalid_data() {
        let mut item = transaction_to_item(&sample_transaction());
        item.remove(ATTR_AMOUNT);

        let err = item_to_transaction(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_item_with_wrong_attribute_type_is_invalid_data() {
        let mut item = transaction_to_item(&sample_transaction());
        item.insert(
            ATTR_TIMESTAMP.to_string(),
            AttributeValue::S("not-a-number".to_string()),
        );

        let err = item_to_transaction(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_non_integer_number_is_invalid_data() {
        let mut item = transaction_to_item(&sample_transaction());
        item.insert(
            ATTR_AMOUNT.to_string(),
            AttributeValue::N("12.5".to_string()),
        );

        let err = item_to_transaction(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }
}
