//! DynamoDB error mapping.
//!
//! Maps AWS SDK service errors to `RepositoryError` from `recipebox_core::storage`.
//! Callers unwrap the `SdkError` with `into_service_error()` first; transport
//! failures arrive here as the unhandled variant of each operation error.

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use recipebox_core::storage::RepositoryError;

const TABLE_NOT_FOUND: &str = "Table not found";
const THROUGHPUT_EXCEEDED: &str = "Throughput exceeded, please retry";
const REQUEST_LIMIT_EXCEEDED: &str = "Request limit exceeded, please retry";
const INTERNAL_SERVER_ERROR: &str = "DynamoDB internal server error";

fn store(message: &str) -> RepositoryError {
    RepositoryError::Store(message.to_string())
}

/// Map a GetItem error to RepositoryError.
pub fn map_get_item_error(err: GetItemError) -> RepositoryError {
    match err {
        GetItemError::ResourceNotFoundException(_) => store(TABLE_NOT_FOUND),
        GetItemError::ProvisionedThroughputExceededException(_) => store(THROUGHPUT_EXCEEDED),
        GetItemError::RequestLimitExceeded(_) => store(REQUEST_LIMIT_EXCEEDED),
        GetItemError::InternalServerError(_) => store(INTERNAL_SERVER_ERROR),
        err => RepositoryError::Store(format!("GetItem failed: {}", DisplayErrorContext(&err))),
    }
}

/// Map a Scan error to RepositoryError.
pub fn map_scan_error(err: ScanError) -> RepositoryError {
    match err {
        ScanError::ResourceNotFoundException(_) => store(TABLE_NOT_FOUND),
        ScanError::ProvisionedThroughputExceededException(_) => store(THROUGHPUT_EXCEEDED),
        ScanError::RequestLimitExceeded(_) => store(REQUEST_LIMIT_EXCEEDED),
        ScanError::InternalServerError(_) => store(INTERNAL_SERVER_ERROR),
        err => RepositoryError::Store(format!("Scan failed: {}", DisplayErrorContext(&err))),
    }
}

/// Map a PutItem error to RepositoryError.
pub fn map_put_item_error(err: PutItemError) -> RepositoryError {
    match err {
        PutItemError::ResourceNotFoundException(_) => store(TABLE_NOT_FOUND),
        PutItemError::ProvisionedThroughputExceededException(_) => store(THROUGHPUT_EXCEEDED),
        PutItemError::RequestLimitExceeded(_) => store(REQUEST_LIMIT_EXCEEDED),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            store("Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => {
            store("Transaction conflict, please retry")
        }
        PutItemError::InternalServerError(_) => store(INTERNAL_SERVER_ERROR),
        err => RepositoryError::Store(format!("PutItem failed: {}", DisplayErrorContext(&err))),
    }
}

/// Map a DeleteItem error to RepositoryError.
pub fn map_delete_item_error(err: DeleteItemError) -> RepositoryError {
    match err {
        DeleteItemError::ResourceNotFoundException(_) => store(TABLE_NOT_FOUND),
        DeleteItemError::ProvisionedThroughputExceededException(_) => store(THROUGHPUT_EXCEEDED),
        DeleteItemError::RequestLimitExceeded(_) => store(REQUEST_LIMIT_EXCEEDED),
        DeleteItemError::TransactionConflictException(_) => {
            store("Transaction conflict, please retry")
        }
        DeleteItemError::InternalServerError(_) => store(INTERNAL_SERVER_ERROR),
        err => RepositoryError::Store(format!("DeleteItem failed: {}", DisplayErrorContext(&err))),
    }
}

/// How an UpdateItem request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateRejection {
    /// The `id` condition did not hold: no item exists under the key.
    ConditionFailed,
    Failed(RepositoryError),
}

/// Classify an UpdateItem error.
///
/// A conditional-check failure is the store's way of saying the record is
/// missing, so it is kept apart from every other failure.
pub fn classify_update_item_error(err: UpdateItemError) -> UpdateRejection {
    let failed = |message: &str| UpdateRejection::Failed(store(message));
    match err {
        UpdateItemError::ConditionalCheckFailedException(_) => UpdateRejection::ConditionFailed,
        UpdateItemError::ResourceNotFoundException(_) => failed(TABLE_NOT_FOUND),
        UpdateItemError::ProvisionedThroughputExceededException(_) => failed(THROUGHPUT_EXCEEDED),
        UpdateItemError::RequestLimitExceeded(_) => failed(REQUEST_LIMIT_EXCEEDED),
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            failed("Item collection size limit exceeded")
        }
        UpdateItemError::TransactionConflictException(_) => {
            failed("Transaction conflict, please retry")
        }
        UpdateItemError::InternalServerError(_) => failed(INTERNAL_SERVER_ERROR),
        err => UpdateRejection::Failed(RepositoryError::Store(format!(
            "UpdateItem failed: {}",
            DisplayErrorContext(&err)
        ))),
    }
}

/// Map a client construction/config error to RepositoryError.
pub fn map_configuration_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, InternalServerError,
        ProvisionedThroughputExceededException, ResourceNotFoundException,
        TransactionConflictException,
    };

    use super::*;

    #[test]
    fn test_conditional_check_failure_is_not_an_error() {
        let err = UpdateItemError::ConditionalCheckFailedException(
            ConditionalCheckFailedException::builder()
                .message("The conditional request failed")
                .build(),
        );

        assert_eq!(
            classify_update_item_error(err),
            UpdateRejection::ConditionFailed
        );
    }

    #[test]
    fn test_update_throttling_is_a_store_failure() {
        let err = UpdateItemError::ProvisionedThroughputExceededException(
            ProvisionedThroughputExceededException::builder().build(),
        );

        assert_eq!(
            classify_update_item_error(err),
            UpdateRejection::Failed(RepositoryError::Store(THROUGHPUT_EXCEEDED.to_string()))
        );
    }

    #[test]
    fn test_update_transaction_conflict_is_a_store_failure() {
        let err = UpdateItemError::TransactionConflictException(
            TransactionConflictException::builder().build(),
        );

        assert!(matches!(
            classify_update_item_error(err),
            UpdateRejection::Failed(RepositoryError::Store(_))
        ));
    }

    #[test]
    fn test_missing_table_maps_to_store_error() {
        let err = GetItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        );
        assert_eq!(
            map_get_item_error(err),
            RepositoryError::Store(TABLE_NOT_FOUND.to_string())
        );

        let err =
            ScanError::ResourceNotFoundException(ResourceNotFoundException::builder().build());
        assert_eq!(
            map_scan_error(err),
            RepositoryError::Store(TABLE_NOT_FOUND.to_string())
        );
    }

    #[test]
    fn test_internal_server_errors() {
        let err = PutItemError::InternalServerError(InternalServerError::builder().build());
        assert_eq!(
            map_put_item_error(err),
            RepositoryError::Store(INTERNAL_SERVER_ERROR.to_string())
        );

        let err = DeleteItemError::InternalServerError(InternalServerError::builder().build());
        assert_eq!(
            map_delete_item_error(err),
            RepositoryError::Store(INTERNAL_SERVER_ERROR.to_string())
        );
    }

    #[test]
    fn test_configuration_error() {
        assert_eq!(
            map_configuration_error("no region"),
            RepositoryError::Configuration("no region".to_string())
        );
    }
}
