//! Core domain types and storage contracts for txledger.
//!
//! This crate defines the [`transaction::Transaction`] entity and the
//! [`storage::TransactionRepository`] trait that storage backends implement.
//! It carries no storage-engine dependencies of its own.

pub mod storage;
pub mod transaction;
