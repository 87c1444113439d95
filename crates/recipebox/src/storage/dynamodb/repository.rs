//! DynamoDB repository implementation.
//!
//! Implements `ProfileRepository` from `recipebox_core::storage` against a
//! single table keyed by the string attribute `id`.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use recipebox_core::profile::{Profile, ProfileDraft};
use recipebox_core::storage::{
    ConditionalUpdate, Page, PageToken, ProfileRepository, Result, ScanRequest,
};

use super::client::{create_client, DynamoDbConfig};
use super::conversions::{
    exclusive_start_key, item_to_profile, items_to_profiles, outcome_from_update_attributes,
    page_token_from_key, profile_from_old_attributes, profile_key, profile_to_item,
};
use super::error::{
    classify_update_item_error, map_delete_item_error, map_get_item_error, map_put_item_error,
    map_scan_error, UpdateRejection,
};
use super::expressions::build_profile_update;

/// DynamoDB-based repository implementation.
///
/// Cheap to clone; the SDK client is reference counted and safe to share.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds the client from the ambient AWS configuration and binds it to the
    /// configured table.
    pub async fn connect(config: &DynamoDbConfig) -> Result<Self> {
        let client = create_client(config).await?;
        Ok(Self::new(client, config.table_name.clone()))
    }
}

#[async_trait]
impl ProfileRepository for DynamoDbRepository {
    async fn get_profile(&self, id: &str) -> Result<Option<Profile>> {
        tracing::debug!(table = %self.table_name, id, "GetItem");

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(profile_key(id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e.into_service_error()))?;

        match result.item {
            Some(item) => Ok(Some(item_to_profile(&item)?)),
            None => Ok(None),
        }
    }

    async fn scan_profiles(&self, request: ScanRequest) -> Result<Page<Profile>> {
        tracing::debug!(
            table = %self.table_name,
            start = request.start.as_ref().map(PageToken::as_str),
            limit = request.limit,
            "Scan"
        );

        let start_key = exclusive_start_key(request.start.as_ref());
        let limit = request.limit.map(|l| l.min(i32::MAX as u32) as i32);

        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(start_key)
            .set_limit(limit)
            .send()
            .await
            .map_err(|e| map_scan_error(e.into_service_error()))?;

        let items = items_to_profiles(result.items())?;
        let next = page_token_from_key(result.last_evaluated_key())?;

        Ok(Page { items, next })
    }

    async fn put_profile(&self, profile: &Profile) -> Result<()> {
        tracing::debug!(table = %self.table_name, id = %profile.id, "PutItem");

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(profile_to_item(profile)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e.into_service_error()))?;

        Ok(())
    }

    async fn delete_profile(&self, id: &str) -> Result<Option<Profile>> {
        tracing::debug!(table = %self.table_name, id, "DeleteItem");

        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(profile_key(id)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e.into_service_error()))?;

        profile_from_old_attributes(result.attributes)
    }

    async fn update_profile(
        &self,
        id: &str,
        draft: &ProfileDraft,
    ) -> Result<ConditionalUpdate<Profile>> {
        tracing::debug!(table = %self.table_name, id, "UpdateItem");

        let expr = build_profile_update(id, draft);

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(profile_key(id)))
            .update_expression(expr.update_expression)
            .condition_expression(expr.condition_expression)
            .set_expression_attribute_names(Some(expr.names))
            .set_expression_attribute_values(Some(expr.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => {
                let outcome = outcome_from_update_attributes(output.attributes)?;
                if matches!(outcome, ConditionalUpdate::ConditionFailed) {
                    tracing::warn!(table = %self.table_name, id, "UpdateItem returned no attributes");
                }
                Ok(outcome)
            }
            Err(err) => match classify_update_item_error(err.into_service_error()) {
                UpdateRejection::ConditionFailed => {
                    tracing::debug!(table = %self.table_name, id, "UpdateItem condition failed");
                    Ok(ConditionalUpdate::ConditionFailed)
                }
                UpdateRejection::Failed(err) => Err(err),
            },
        }
    }
}
