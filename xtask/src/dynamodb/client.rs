//! AWS SDK client setup (Imperative Shell).

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{KeyType, TableStatus as SdkTableStatus};
use aws_sdk_dynamodb::Client;
use recipebox::config::Config;
use recipebox::storage::DynamoDbConfig;

/// Connection settings for `table_name`, read from the same environment the
/// server uses.
pub fn connection_config(table_name: &str) -> DynamoDbConfig {
    table_connection(Config::from_env(), table_name)
}

fn table_connection(mut config: Config, table_name: &str) -> DynamoDbConfig {
    config.table_name = table_name.to_string();
    config.dynamodb_config()
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &DynamoDbConfig) -> Result<Client> {
    Ok(recipebox::storage::dynamodb::create_client(config).await?)
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    let response = match client.describe_table().table_name(table_name).send().await {
        Ok(response) => response,
        Err(err) => {
            return match err.into_service_error() {
                DescribeTableError::ResourceNotFoundException(_) => Ok(None),
                other => Err(DynamodbError::AwsSdk(
                    DisplayErrorContext(&other).to_string(),
                )),
            }
        }
    };

    let Some(table) = response.table() else {
        return Ok(None);
    };

    let status = match table.table_status() {
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Active,
    };

    let key_schema = table.key_schema();
    let partition_key = key_schema
        .iter()
        .find(|k| k.key_type() == &KeyType::Hash)
        .map(|k| k.attribute_name().to_string());
    let has_sort_key = key_schema.iter().any(|k| k.key_type() == &KeyType::Range);

    Ok(Some(TableState {
        status,
        partition_key,
        has_sort_key,
    }))
}
