use super::error::ProfileError;
use super::types::{Profile, ProfileDraft};

/// Validates a draft before it is inserted or used as an update.
///
/// The record operations never call this themselves; the HTTP layer does.
pub fn validate_draft(draft: &ProfileDraft) -> Result<(), ProfileError> {
    if draft.full_name.trim().is_empty() {
        return Err(ProfileError::EmptyFullName);
    }
    let email = draft.email.trim();
    if email.is_empty() {
        return Err(ProfileError::EmptyEmail);
    }
    if !is_plausible_email(email) {
        return Err(ProfileError::InvalidEmail(draft.email.clone()));
    }
    if draft.authored_recipes.iter().any(|r| r.trim().is_empty()) {
        return Err(ProfileError::BlankRecipeId {
            field: "authoredRecipes",
        });
    }
    if draft.liked_recipes.iter().any(|r| r.trim().is_empty()) {
        return Err(ProfileError::BlankRecipeId {
            field: "likedRecipes",
        });
    }
    Ok(())
}

/// Builds the full record for an insert from a freshly generated id.
pub fn compose_profile(id: impl Into<String>, draft: ProfileDraft) -> Profile {
    Profile {
        id: id.into(),
        full_name: draft.full_name,
        email: draft.email,
        authored_recipes: draft.authored_recipes,
        liked_recipes: draft.liked_recipes,
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}
