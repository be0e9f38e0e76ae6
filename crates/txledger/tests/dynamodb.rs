//! Integration tests for the DynamoDB backend against DynamoDB Local.
//!
//! Requires a container runtime. Run with:
//!
//! ```bash
//! cargo test -p txledger --features test-harness --test dynamodb
//! ```
//!
//! Set `TXLEDGER_SHORT_TESTS=1` to skip.

use std::time::{SystemTime, UNIX_EPOCH};

use txledger::testing::{short_mode, DynamoDbTestHarness};
use txledger::{RepositoryError, Transaction, TransactionRepository};

const USER_A: &str = "5a0aeb2d-36c6-4400-a7e8-60f78b8e1198";
const USER_B: &str = "07cea472-6a29-4664-b2ce-856ea8eafd02";

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(USER_A, 200, now()).with_id("21e4e1bc-b2f8-4a47-b092-3e0c452462e0"),
        Transaction::new(USER_A, 100, now()).with_id("a4c8c909-3925-4110-898e-176c7eb4f9a3"),
        Transaction::new(USER_B, 300, now()).with_id("01cd3dbc-0191-49d9-80b6-e91ab46e8478"),
    ]
}

/// Compares ignoring order: the store does not guarantee inter-item ordering
/// within a partition absent a sort-key constraint.
fn assert_same_transactions(mut got: Vec<Transaction>, mut want: Vec<Transaction>) {
    got.sort_by(|a, b| a.id.cmp(&b.id));
    want.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(got, want);
}

#[tokio::test]
async fn dynamodb_repository_integration() {
    if short_mode() {
        eprintln!("short mode: skipping DynamoDB integration test");
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "txledger=debug".into()),
        )
        .try_init()
        .ok();

    let harness = DynamoDbTestHarness::start()
        .await
        .expect("could not start DynamoDB test harness");
    let repo = harness.repository();

    let seed = seed_transactions();
    for transaction in &seed {
        repo.add_transaction(transaction)
            .await
            .expect("could not add transaction");
    }

    // Multiple transactions from one user's partition.
    let transactions = repo
        .get_transactions_by_user_id(USER_A)
        .await
        .expect("could not get transactions");
    assert_same_transactions(transactions, seed[..2].to_vec());

    // A single transaction from the other partition; no cross-partition leaks.
    let transactions = repo
        .get_transactions_by_user_id(USER_B)
        .await
        .expect("could not get transactions");
    assert_same_transactions(transactions, seed[2..].to_vec());

    // Unknown partition: empty, not an error.
    let transactions = repo
        .get_transactions_by_user_id("invalid")
        .await
        .expect("could not get transactions");
    assert!(transactions.is_empty());

    // Point lookup on a valid primary key.
    let transaction = repo
        .get_transaction_by_id(USER_A, &seed[0].id)
        .await
        .expect("could not get transaction");
    assert_eq!(transaction, seed[0]);

    // Point lookup on an absent key fails with the sentinel.
    let err = repo
        .get_transaction_by_id(USER_A, "invalid")
        .await
        .expect_err("expected a NotFound error");
    assert_eq!(err, RepositoryError::NotFound);

    // Adding the same transaction again leaves exactly one item at the key.
    repo.add_transaction(&seed[0])
        .await
        .expect("could not re-add transaction");
    let transactions = repo
        .get_transactions_by_user_id(USER_A)
        .await
        .expect("could not get transactions");
    assert_same_transactions(transactions, seed[..2].to_vec());
}
