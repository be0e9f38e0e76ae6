//! DynamoDB repository implementation.
//!
//! Implements [`TransactionRepository`] from `txledger_core::storage` against
//! a table with composite key schema `(user_id HASH, id RANGE)`.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use txledger_core::storage::{RepositoryError, Result, TransactionRepository};
use txledger_core::transaction::Transaction;

use super::conversions::{item_to_transaction, transaction_to_item, ATTR_ID, ATTR_USER_ID};
use super::error::{map_get_item_error, map_put_item_error, map_query_error, BuildError};

/// Default table name, matching what the test harness provisions.
pub const DEFAULT_TABLE_NAME: &str = "transactions";

/// DynamoDB-based transaction repository.
///
/// Holds an immutable client and table name set once at construction; the
/// SDK client is safe for concurrent use and the repository inherits that
/// property.
pub struct DynamoDbTransactionRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbTransactionRepository {
    /// Returns a builder for assembling a repository from a pre-constructed
    /// client and a table name.
    ///
    /// Keeping construction open-ended decouples the repository from how the
    /// client is authenticated or pointed at an endpoint, so production
    /// wiring and test wiring share one constructor.
    pub fn builder() -> DynamoDbTransactionRepositoryBuilder {
        DynamoDbTransactionRepositoryBuilder::default()
    }

    /// Creates a new repository from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain and reads the table name
    /// from `TXLEDGER_TABLE_NAME` (defaults to `transactions`).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let table_name =
            std::env::var("TXLEDGER_TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string());

        Self {
            client: Client::new(&config),
            table_name,
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Builder for [`DynamoDbTransactionRepository`].
#[derive(Default)]
pub struct DynamoDbTransactionRepositoryBuilder {
    client: Option<Client>,
    table_name: Option<String>,
}

impl DynamoDbTransactionRepositoryBuilder {
    /// Installs a pre-constructed DynamoDB client.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Installs the target table name.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Assembles the repository, failing if either option is missing.
    pub fn build(self) -> std::result::Result<DynamoDbTransactionRepository, BuildError> {
        Ok(DynamoDbTransactionRepository {
            client: self.client.ok_or(BuildError::MissingClient)?,
            table_name: self.table_name.ok_or(BuildError::MissingTableName)?,
        })
    }
}

#[async_trait]
impl TransactionRepository for DynamoDbTransactionRepository {
    async fn get_transactions_by_user_id(&self, user_id: &str) -> Result<Vec<Transaction>> {
        // Key-condition expression only, so the store scans nothing outside
        // the partition. No sort-key constraint: the whole partition comes
        // back, one response page.
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("user_id = :user_id")
            .expression_attribute_values(":user_id", AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_transaction).collect()
    }

    async fn get_transaction_by_id(
        &self,
        user_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_USER_ID, AttributeValue::S(user_id.to_string()))
            .key(ATTR_ID, AttributeValue::S(transaction_id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => item_to_transaction(&item),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn add_transaction(&self, transaction: &Transaction) -> Result<()> {
        let item = transaction_to_item(transaction);

        // Unconditional put: an existing item at (user_id, id) is replaced.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
