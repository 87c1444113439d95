use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// A missing record is never an error: lookups return `Ok(None)` and the
/// conditional update reports [`ConditionalUpdate::ConditionFailed`].
///
/// [`ConditionalUpdate::ConditionFailed`]: super::ConditionalUpdate::ConditionFailed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Codec error: {0}")]
    Codec(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("Store request timed out: {operation}")]
    Timeout { operation: &'static str },
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_configuration_display() {
        let error = RepositoryError::Configuration("no region".to_string());
        assert_eq!(error.to_string(), "Configuration error: no region");
    }

    #[test]
    fn test_repository_error_codec_display() {
        let error = RepositoryError::Codec("missing attribute 'email'".to_string());
        assert_eq!(error.to_string(), "Codec error: missing attribute 'email'");
    }

    #[test]
    fn test_repository_error_store_display() {
        let error = RepositoryError::Store("Throughput exceeded, please retry".to_string());
        assert_eq!(
            error.to_string(),
            "Store error: Throughput exceeded, please retry"
        );
    }

    #[test]
    fn test_repository_error_timeout_display() {
        let error = RepositoryError::Timeout { operation: "Scan" };
        assert_eq!(error.to_string(), "Store request timed out: Scan");
    }
}
