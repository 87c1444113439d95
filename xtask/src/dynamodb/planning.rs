//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    /// Hash key attribute name, if the description reported one.
    pub partition_key: Option<String>,
    /// True when the table also has a range key.
    pub has_sort_key: bool,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with a key schema profiles cannot be stored in.
    /// Key schemas are immutable, so the table has to be destroyed first.
    IncompatibleKeySchema { table_name: String, found: String },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let key_matches = state.partition_key.as_deref() == Some(desired.partition_key.name.as_str());
    if key_matches && !state.has_sort_key {
        DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        let mut found = format!(
            "hash key {}",
            state.partition_key.as_deref().unwrap_or("<none>")
        );
        if state.has_sort_key {
            found.push_str(" with a range key");
        }
        DeployPlan::IncompatibleKeySchema {
            table_name: desired.table_name.clone(),
            found,
        }
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key.name),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::IncompatibleKeySchema { table_name, found } => vec![
            format!("! Table '{}' has an incompatible key schema", table_name),
            format!("  Found: {}", found),
            "  Destroy it first with --destroy".to_string(),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::profile_table_config;

    fn existing(partition_key: Option<&str>, has_sort_key: bool) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: partition_key.map(str::to_string),
            has_sort_key,
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = profile_table_config();

        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let desired = profile_table_config();
        let state = existing(Some("id"), false);

        let plan = calculate_deploy_plan(Some(&state), &desired);

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "recipebox".to_string()
            }
        );
    }

    #[test]
    fn test_other_key_schema_is_incompatible() {
        let desired = profile_table_config();
        let state = existing(Some("PK"), true);

        let plan = calculate_deploy_plan(Some(&state), &desired);

        assert_eq!(
            plan,
            DeployPlan::IncompatibleKeySchema {
                table_name: "recipebox".to_string(),
                found: "hash key PK with a range key".to_string(),
            }
        );
    }

    #[test]
    fn test_destroy_plan() {
        let state = existing(Some("id"), false);

        assert_eq!(
            calculate_destroy_plan(Some(&state), "recipebox"),
            DestroyPlan::DeleteTable {
                table_name: "recipebox".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(None, "recipebox"),
            DestroyPlan::AlreadyGone {
                table_name: "recipebox".to_string()
            }
        );
    }

    #[test]
    fn test_format_create_plan() {
        let lines = format_deploy_plan(&DeployPlan::CreateTable {
            config: profile_table_config(),
        });

        assert_eq!(lines[0], "+ Create table: recipebox");
        assert_eq!(lines[1], "  Partition key: id (S)");
    }
}
