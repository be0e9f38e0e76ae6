//! Integration-test infrastructure.
//!
//! This module provisions an ephemeral DynamoDB Local container for a single
//! test, waits for it to accept requests, creates the `transactions` table,
//! and yields a ready repository. The container is removed when the harness
//! is dropped, whether the test passed, failed, or panicked.
//!
//! # Usage
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! use txledger::testing::{short_mode, DynamoDbTestHarness};
//!
//! if short_mode() {
//!     eprintln!("short mode: skipping container-backed test");
//!     return Ok(());
//! }
//! let harness = DynamoDbTestHarness::start().await?;
//! let repository = harness.repository();
//! # Ok(())
//! # }
//! ```

mod container;
mod harness;

pub use container::{detect_runtime, ContainerRuntime, DynamoDbLocal, DYNAMODB_LOCAL_IMAGE};
pub use harness::{DynamoDbTestHarness, TEST_TABLE_NAME};

/// Returns true when slow, container-backed tests should be skipped.
///
/// Set `TXLEDGER_SHORT_TESTS=1` to run only the fast test suite. The gate is
/// checked before any container runtime is touched.
pub fn short_mode() -> bool {
    std::env::var_os("TXLEDGER_SHORT_TESTS").is_some_and(|v| v != "0")
}
