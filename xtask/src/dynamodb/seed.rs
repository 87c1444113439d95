//! Seed command implementation.

use recipebox::service::ProfileService;
use recipebox_core::profile::{validate_draft, Profile, ProfileDraft};

use super::error::Result;

/// Insert profiles one at a time through the regular insert path, so every
/// seeded record gets a fresh id exactly like an API-created one.
///
/// Stops at the first failure; profiles inserted before it stay in the table.
pub async fn seed_profiles(service: &ProfileService, drafts: Vec<ProfileDraft>) -> Result<Vec<Profile>> {
    let mut inserted = Vec::with_capacity(drafts.len());
    for draft in drafts {
        inserted.push(service.insert(draft).await?);
    }
    Ok(inserted)
}

/// Seed drafts must pass the same validation the API applies.
pub fn invalid_drafts(drafts: &[ProfileDraft]) -> Vec<String> {
    drafts
        .iter()
        .filter_map(|draft| {
            validate_draft(draft)
                .err()
                .map(|e| format!("{}: {}", draft.email, e))
        })
        .collect()
}

/// Format a draft for the preview list.
pub fn format_draft(draft: &ProfileDraft) -> String {
    format!(
        "{} <{}> ({} authored, {} liked)",
        draft.full_name,
        draft.email,
        draft.authored_recipes.len(),
        draft.liked_recipes.len()
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use recipebox::storage::InMemoryRepository;
    use recipebox_core::profile::generate_seed_drafts;

    use super::*;

    #[tokio::test]
    async fn test_seed_profiles_inserts_every_draft() {
        let repo = InMemoryRepository::new();
        let service = ProfileService::new(Arc::new(repo.clone()));
        let drafts = generate_seed_drafts(5);

        let inserted = seed_profiles(&service, drafts.clone()).await.unwrap();

        assert_eq!(inserted.len(), 5);
        assert_eq!(repo.len().await, 5);
        let seeded: Vec<ProfileDraft> = inserted.iter().map(Profile::to_draft).collect();
        assert_eq!(seeded, drafts);
    }

    #[test]
    fn test_generated_drafts_are_valid() {
        assert!(invalid_drafts(&generate_seed_drafts(25)).is_empty());
    }

    #[test]
    fn test_invalid_drafts_are_reported() {
        let drafts = vec![ProfileDraft::new("", "nobody@example.com")];

        let problems = invalid_drafts(&drafts);

        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("nobody@example.com: "));
    }

    #[test]
    fn test_format_draft() {
        let draft = ProfileDraft::new("Ada", "ada@example.com").with_liked_recipes(["ramen"]);

        assert_eq!(
            format_draft(&draft),
            "Ada <ada@example.com> (0 authored, 1 liked)"
        );
    }
}
