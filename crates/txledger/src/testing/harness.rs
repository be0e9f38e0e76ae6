//! Test harness lifecycle: container, client, readiness, schema, repository.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use crate::storage::dynamodb::{
    DynamoDbTransactionRepository, ATTR_ID, ATTR_USER_ID, DEFAULT_TABLE_NAME,
};

use super::container::{detect_runtime, DynamoDbLocal};

/// Table name provisioned by the harness.
pub const TEST_TABLE_NAME: &str = DEFAULT_TABLE_NAME;

/// Maximum time to wait for the store to accept requests.
const READINESS_TIMEOUT: Duration = Duration::from_secs(60);

/// Interval between readiness probes.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A repository bound to a fresh, sandboxed DynamoDB Local instance.
///
/// Each harness owns its own container and ephemeral host port, so multiple
/// tests can run disjoint harnesses concurrently with no cross-test
/// coupling. Dropping the harness removes the container.
pub struct DynamoDbTestHarness {
    // Held for its Drop impl; the container outlives the repository.
    _container: DynamoDbLocal,
    repository: DynamoDbTransactionRepository,
}

impl DynamoDbTestHarness {
    /// Brings up DynamoDB Local, waits for readiness, creates the
    /// `transactions` table, and returns a ready repository.
    ///
    /// Callers gate on [`short_mode`](super::short_mode) first; this function
    /// always touches the container runtime.
    pub async fn start() -> Result<Self> {
        let runtime = detect_runtime()
            .await
            .context("could not find a container runtime")?;

        let container = DynamoDbLocal::start(runtime)
            .await
            .context("could not start DynamoDB Local")?;

        let client = local_client(container.host_port()).await;

        wait_until_responsive(&client, READINESS_TIMEOUT)
            .await
            .context("could not connect to DynamoDB Local")?;

        create_transactions_table(&client)
            .await
            .context("could not create table")?;

        let repository = DynamoDbTransactionRepository::builder()
            .client(client)
            .table_name(TEST_TABLE_NAME)
            .build()?;

        tracing::info!(table = TEST_TABLE_NAME, "test harness ready");
        Ok(Self {
            _container: container,
            repository,
        })
    }

    /// The repository bound to the sandboxed store.
    pub fn repository(&self) -> &DynamoDbTransactionRepository {
        &self.repository
    }
}

/// Constructs a client pointed at the local store.
///
/// DynamoDB Local ignores credentials, but the client must present
/// something, so a static dummy pair stands in for the default chain.
async fn local_client(port: u16) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .endpoint_url(format!("http://localhost:{port}"))
        .credentials_provider(Credentials::new("local", "local", None, None, "txledger"))
        .load()
        .await;
    Client::new(&config)
}

/// Polls the store with a trivial ListTables request until it succeeds.
async fn wait_until_responsive(client: &Client, timeout: Duration) -> Result<()> {
    let start = Instant::now();

    while start.elapsed() < timeout {
        match client.list_tables().limit(1).send().await {
            Ok(_) => return Ok(()),
            Err(err) => {
                tracing::debug!(error = %err, "store not responsive yet");
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }
    }

    bail!(
        "DynamoDB Local did not become responsive within {}s",
        timeout.as_secs()
    )
}

/// Creates the `transactions` table with key schema `(user_id HASH, id RANGE)`.
///
/// Provisioned throughput is required by the local store's API even though
/// it is ignored there.
async fn create_transactions_table(client: &Client) -> Result<()> {
    client
        .create_table()
        .table_name(TEST_TABLE_NAME)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(ATTR_USER_ID)
                .attribute_type(ScalarAttributeType::S)
                .build()?,
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(ATTR_ID)
                .attribute_type(ScalarAttributeType::S)
                .build()?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(ATTR_USER_ID)
                .key_type(KeyType::Hash)
                .build()?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(ATTR_ID)
                .key_type(KeyType::Range)
                .build()?,
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(1)
                .write_capacity_units(1)
                .build()?,
        )
        .send()
        .await?;

    Ok(())
}
