//! DynamoDB client accessor.
//!
//! Builds an SDK client from the ambient AWS configuration (credential chain,
//! region, optional endpoint override). This runs once at startup.

use aws_sdk_dynamodb::Client;
use recipebox_core::storage::{RepositoryError, Result};

use super::error::map_configuration_error;

/// Connection settings for the profiles table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDbConfig {
    pub table_name: String,
    /// Region override. Falls back to the SDK's region provider chain.
    pub region: Option<String>,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
}

impl DynamoDbConfig {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            region: None,
            endpoint_url: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match (&self.endpoint_url, &self.region) {
            (Some(url), _) => format!("Local DynamoDB ({})", url),
            (None, Some(region)) => format!("AWS DynamoDB (region: {})", region),
            (None, None) => "AWS DynamoDB (default region)".to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            return Err(RepositoryError::Configuration(
                "DynamoDB table name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Creates a DynamoDB client with the given configuration.
///
/// Fails with `RepositoryError::Configuration` when the table name is empty or
/// no region can be resolved from the configuration or the environment.
pub async fn create_client(config: &DynamoDbConfig) -> Result<Client> {
    config.validate()?;

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    if sdk_config.region().is_none() {
        return Err(map_configuration_error(
            "No AWS region configured; set AWS_REGION or an AWS profile region",
        ));
    }

    Ok(Client::new(&sdk_config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        let config = DynamoDbConfig::new("recipebox").with_endpoint_url("http://localhost:8000");
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );

        let config = DynamoDbConfig::new("recipebox").with_region("eu-west-1");
        assert_eq!(
            config.target_display(),
            "AWS DynamoDB (region: eu-west-1)"
        );
    }

    #[tokio::test]
    async fn test_empty_table_name_is_configuration_error() {
        let config = DynamoDbConfig::new("  ").with_region("us-east-1");

        let result = create_client(&config).await;

        assert!(matches!(result, Err(RepositoryError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_client_with_explicit_region_and_endpoint() {
        let config = DynamoDbConfig::new("recipebox")
            .with_region("us-east-1")
            .with_endpoint_url("http://localhost:8000");

        let client = create_client(&config).await.unwrap();

        assert_eq!(
            client.config().region().map(|r| r.as_ref()),
            Some("us-east-1")
        );
    }
}
