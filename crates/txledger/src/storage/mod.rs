//! Storage backend implementations.
//!
//! Concrete implementations of the repository trait defined in
//! `txledger_core::storage`. Unlike a server binary that picks exactly one
//! backend, this library lets the features coexist: the in-memory backend is
//! commonly enabled alongside `dynamodb` so unit tests can run without AWS.

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryTransactionRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTransactionRepository;
