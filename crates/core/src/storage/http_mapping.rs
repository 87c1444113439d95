//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `Configuration` -> 503 (Service Unavailable)
/// - `Codec` -> 500 (Internal Server Error)
/// - `Store` -> 502 (Bad Gateway)
/// - `Timeout` -> 504 (Gateway Timeout)
///
/// Missing records never reach this function; handlers turn `None` into 404.
///
/// # Examples
///
/// ```
/// use recipebox_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::Timeout { operation: "GetItem" };
/// assert_eq!(repository_error_to_status_code(&error), 504);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::Configuration(_) => 503,
        RepositoryError::Codec(_) => 500,
        RepositoryError::Store(_) => 502,
        RepositoryError::Timeout { .. } => 504,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_maps_to_503() {
        let error = RepositoryError::Configuration("region not set".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_codec_maps_to_500() {
        let error = RepositoryError::Codec("expected a string list".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_store_maps_to_502() {
        let error = RepositoryError::Store("DynamoDB internal server error".to_string());
        assert_eq!(repository_error_to_status_code(&error), 502);
    }

    #[test]
    fn test_timeout_maps_to_504() {
        let error = RepositoryError::Timeout {
            operation: "UpdateItem",
        };
        assert_eq!(repository_error_to_status_code(&error), 504);
    }
}
