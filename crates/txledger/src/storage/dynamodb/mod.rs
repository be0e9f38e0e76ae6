//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! [`TransactionRepository`](txledger_core::storage::TransactionRepository)
//! using `aws-sdk-dynamodb`. Items live in a table with composite key schema
//! `(user_id HASH, id RANGE)`.

mod conversions;
mod error;
mod repository;

pub use conversions::{ATTR_AMOUNT, ATTR_ID, ATTR_TIMESTAMP, ATTR_USER_ID};
pub use error::BuildError;
pub use repository::{
    DynamoDbTransactionRepository, DynamoDbTransactionRepositoryBuilder, DEFAULT_TABLE_NAME,
};
