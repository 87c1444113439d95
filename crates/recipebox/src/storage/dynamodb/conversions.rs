//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and profiles.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use recipebox_core::profile::Profile;
use recipebox_core::storage::{ConditionalUpdate, PageToken, RepositoryError};

// ============================================================================
// Attribute names
// ============================================================================

pub const ID: &str = "id";
pub const FULL_NAME: &str = "fullname";
pub const EMAIL: &str = "email";
pub const AUTHORED_RECIPES: &str = "authoredRecipes";
pub const LIKED_RECIPES: &str = "likedRecipes";

// ============================================================================
// Profile conversions
// ============================================================================

/// Convert a Profile to DynamoDB item.
pub fn profile_to_item(profile: &Profile) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ID.to_string(), AttributeValue::S(profile.id.clone()));
    item.insert(
        FULL_NAME.to_string(),
        AttributeValue::S(profile.full_name.clone()),
    );
    item.insert(EMAIL.to_string(), AttributeValue::S(profile.email.clone()));
    item.insert(
        AUTHORED_RECIPES.to_string(),
        string_list(&profile.authored_recipes),
    );
    item.insert(
        LIKED_RECIPES.to_string(),
        string_list(&profile.liked_recipes),
    );

    item
}

/// Convert a DynamoDB item to Profile.
pub fn item_to_profile(item: &HashMap<String, AttributeValue>) -> Result<Profile, RepositoryError> {
    Ok(Profile {
        id: get_string(item, ID)?,
        full_name: get_string(item, FULL_NAME)?,
        email: get_string(item, EMAIL)?,
        authored_recipes: get_string_list(item, AUTHORED_RECIPES)?,
        liked_recipes: get_string_list(item, LIKED_RECIPES)?,
    })
}

/// Convert a batch of DynamoDB items, failing on the first bad item.
pub fn items_to_profiles(
    items: &[HashMap<String, AttributeValue>],
) -> Result<Vec<Profile>, RepositoryError> {
    items.iter().map(item_to_profile).collect()
}

/// Key map addressing a single profile.
pub fn profile_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ID.to_string(), AttributeValue::S(id.to_string()))])
}

/// Encode a list of strings as a DynamoDB `L` of `S` values.
///
/// Lists, unlike string sets, keep order and may be empty.
pub fn string_list(values: &[String]) -> AttributeValue {
    AttributeValue::L(values.iter().cloned().map(AttributeValue::S).collect())
}

// ============================================================================
// Pagination keys
// ============================================================================

/// `ExclusiveStartKey` for resuming a scan after `token`.
///
/// An empty token means "from the beginning".
pub fn exclusive_start_key(token: Option<&PageToken>) -> Option<HashMap<String, AttributeValue>> {
    token
        .filter(|t| !t.as_str().is_empty())
        .map(|t| profile_key(t.as_str()))
}

/// Continuation token from a scan's `LastEvaluatedKey`.
///
/// An absent or empty key ends the page chain. A non-empty key must carry the
/// string attribute `id`.
pub fn page_token_from_key(
    key: Option<&HashMap<String, AttributeValue>>,
) -> Result<Option<PageToken>, RepositoryError> {
    match key {
        None => Ok(None),
        Some(key) if key.is_empty() => Ok(None),
        Some(key) => match key.get(ID) {
            Some(AttributeValue::S(id)) if !id.is_empty() => Ok(Some(PageToken::new(id.clone()))),
            _ => Err(RepositoryError::Codec(
                "LastEvaluatedKey is missing the string attribute 'id'".to_string(),
            )),
        },
    }
}

// ============================================================================
// Returned attributes
// ============================================================================

/// Decode the `ALL_OLD` attributes of a DeleteItem response.
///
/// No attributes (or an empty map) means no item existed under the key.
pub fn profile_from_old_attributes(
    attributes: Option<HashMap<String, AttributeValue>>,
) -> Result<Option<Profile>, RepositoryError> {
    match attributes {
        Some(attributes) if !attributes.is_empty() => item_to_profile(&attributes).map(Some),
        _ => Ok(None),
    }
}

/// Decode the `ALL_NEW` attributes of a successful conditional UpdateItem.
///
/// A response without attributes is reported as a failed condition: nothing
/// can be returned for the key.
pub fn outcome_from_update_attributes(
    attributes: Option<HashMap<String, AttributeValue>>,
) -> Result<ConditionalUpdate<Profile>, RepositoryError> {
    match attributes {
        Some(attributes) if !attributes.is_empty() => {
            item_to_profile(&attributes).map(ConditionalUpdate::Applied)
        }
        _ => Ok(ConditionalUpdate::ConditionFailed),
    }
}

// ============================================================================
// Attribute helpers
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    match item.get(key) {
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(other) => Err(RepositoryError::Codec(format!(
            "Expected a string for {}, found {:?}",
            key, other
        ))),
        None => Err(RepositoryError::Codec(format!("Missing field: {}", key))),
    }
}

/// Get a required list-of-strings attribute.
///
/// Accepts a list of `S` values or a string set (`SS`).
fn get_string_list(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Vec<String>, RepositoryError> {
    match item.get(key) {
        Some(AttributeValue::L(values)) => values
            .iter()
            .map(|v| match v {
                AttributeValue::S(s) => Ok(s.clone()),
                other => Err(RepositoryError::Codec(format!(
                    "Expected only strings in {}, found {:?}",
                    key, other
                ))),
            })
            .collect(),
        Some(AttributeValue::Ss(values)) => Ok(values.clone()),
        Some(other) => Err(RepositoryError::Codec(format!(
            "Expected a string list for {}, found {:?}",
            key, other
        ))),
        None => Err(RepositoryError::Codec(format!("Missing field: {}", key))),
    }
}
