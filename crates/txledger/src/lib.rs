//! Storage backends for the txledger transaction repository.
//!
//! Implementations of [`txledger_core::storage::TransactionRepository`] are
//! selected at compile time via feature flags:
//!
//! - `inmemory` (default): `HashMap`-backed repository for tests and local
//!   development
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `test-harness`: spins up DynamoDB Local in a Docker/Podman container
//!   for integration tests (implies `dynamodb`)

pub mod storage;

#[cfg(feature = "test-harness")]
pub mod testing;

pub use txledger_core::storage::{RepositoryError, Result, TransactionRepository};
pub use txledger_core::transaction::Transaction;
