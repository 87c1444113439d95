//! Update expression construction.
//!
//! Pure functions that build the expression strings and placeholder maps for
//! the conditional profile update. No I/O.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use recipebox_core::profile::ProfileDraft;

use super::conversions::{string_list, AUTHORED_RECIPES, EMAIL, FULL_NAME, ID, LIKED_RECIPES};

/// The pieces of an `UpdateItem` request that come from the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalUpdateExpression {
    pub update_expression: String,
    pub condition_expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build the update for `id`: set every non-key attribute from `draft`, and
/// only if the stored item's `id` equals `id`.
///
/// The condition fails when no item exists under the key, which is how the
/// store reports "nothing to update" without a separate read.
pub fn build_profile_update(id: &str, draft: &ProfileDraft) -> ConditionalUpdateExpression {
    let assignments: [(&str, AttributeValue); 4] = [
        (FULL_NAME, AttributeValue::S(draft.full_name.clone())),
        (EMAIL, AttributeValue::S(draft.email.clone())),
        (AUTHORED_RECIPES, string_list(&draft.authored_recipes)),
        (LIKED_RECIPES, string_list(&draft.liked_recipes)),
    ];

    let mut names = HashMap::new();
    let mut values = HashMap::new();
    let mut clauses = Vec::with_capacity(assignments.len());

    for (attribute, value) in assignments {
        let name = name_placeholder(attribute);
        let value_ref = value_placeholder(attribute);
        clauses.push(format!("{name} = {value_ref}"));
        names.insert(name, attribute.to_string());
        values.insert(value_ref, value);
    }

    let id_name = name_placeholder(ID);
    let id_value = value_placeholder(ID);
    let condition_expression = format!("{id_name} = {id_value}");
    names.insert(id_name, ID.to_string());
    values.insert(id_value, AttributeValue::S(id.to_string()));

    ConditionalUpdateExpression {
        update_expression: format!("SET {}", clauses.join(", ")),
        condition_expression,
        names,
        values,
    }
}

fn name_placeholder(attribute: &str) -> String {
    format!("#{attribute}")
}

fn value_placeholder(attribute: &str) -> String {
    format!(":{attribute}")
}
