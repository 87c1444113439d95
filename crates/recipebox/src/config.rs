use std::{env, time::Duration};

#[cfg(feature = "dynamodb")]
use crate::storage::DynamoDbConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding profile items (default: "recipebox")
    pub table_name: String,
    /// AWS region override; the SDK provider chain is used when unset
    pub region: Option<String>,
    /// Endpoint override, e.g. DynamoDB Local at http://localhost:8000
    pub endpoint_url: Option<String>,
    /// Maximum items per scan page; the store decides when unset
    pub scan_page_size: Option<u32>,
    /// Deadline for a single store round trip in seconds (default: 10)
    pub store_timeout_seconds: u64,
    /// Deadline for a whole HTTP request in seconds (default: 30)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "recipebox")
    /// - `AWS_REGION` - Region (optional)
    /// - `AWS_ENDPOINT_URL` - Endpoint override (optional)
    /// - `SCAN_PAGE_SIZE` - Scan page limit (optional)
    /// - `STORE_TIMEOUT_SECONDS` - Per round trip deadline (default: 10)
    /// - `REQUEST_TIMEOUT_SECONDS` - Per HTTP request deadline (default: 30)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "recipebox".to_string()),
            region: non_empty_var("AWS_REGION"),
            endpoint_url: non_empty_var("AWS_ENDPOINT_URL"),
            scan_page_size: env::var("SCAN_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &u32| n > 0),
            store_timeout_seconds: positive_secs("STORE_TIMEOUT_SECONDS").unwrap_or(10),
            request_timeout_seconds: positive_secs("REQUEST_TIMEOUT_SECONDS").unwrap_or(30),
        }
    }

    /// Get the store round trip deadline as a Duration.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_seconds)
    }

    /// Get the HTTP request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Connection settings for the DynamoDB client.
    #[cfg(feature = "dynamodb")]
    pub fn dynamodb_config(&self) -> DynamoDbConfig {
        let mut config = DynamoDbConfig::new(self.table_name.clone());
        if let Some(region) = &self.region {
            config = config.with_region(region.clone());
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            config = config.with_endpoint_url(endpoint_url.clone());
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// A zero deadline would fail every call, so it counts as unset.
fn positive_secs(key: &str) -> Option<u64> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|&n: &u64| n > 0)
}
