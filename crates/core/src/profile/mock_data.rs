//! Mock data generation for testing and seeding.
//!
//! Pure functions producing deterministic drafts. Used by unit tests and by
//! `cargo xtask dynamodb seed`.

use super::types::ProfileDraft;

const FIRST_NAMES: [&str; 8] = [
    "Ada", "Grace", "Alan", "Katherine", "Edsger", "Barbara", "Donald", "Margaret",
];

const LAST_NAMES: [&str; 6] = ["Lovelace", "Hopper", "Turing", "Johnson", "Liskov", "Knuth"];

const RECIPES: [&str; 10] = [
    "shakshuka",
    "pad-thai",
    "ramen",
    "paella",
    "banana-bread",
    "pho",
    "risotto",
    "tamales",
    "bibimbap",
    "moussaka",
];

/// Generate `count` drafts with distinct names and emails.
///
/// Each draft authors between zero and two recipes and likes between one and
/// three, picked deterministically from a fixed recipe list.
///
/// # Example
///
/// ```
/// use recipebox_core::profile::generate_seed_drafts;
///
/// let drafts = generate_seed_drafts(12);
///
/// assert_eq!(drafts.len(), 12);
/// assert!(drafts.iter().all(|d| d.email.contains('@')));
/// ```
pub fn generate_seed_drafts(count: u32) -> Vec<ProfileDraft> {
    (0..count as usize)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let email = format!("{}.{}.{}@example.com", first, last, i).to_lowercase();

            let authored = (0..i % 3).map(|k| RECIPES[(i + k) % RECIPES.len()]);
            let liked = (0..1 + i % 3).map(|k| RECIPES[(i * 3 + k + 5) % RECIPES.len()]);

            ProfileDraft::new(format!("{first} {last}"), email)
                .with_authored_recipes(authored)
                .with_liked_recipes(liked)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::profile::validate_draft;

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(generate_seed_drafts(0).len(), 0);
        assert_eq!(generate_seed_drafts(25).len(), 25);
    }

    #[test]
    fn test_emails_are_unique() {
        let drafts = generate_seed_drafts(60);
        let emails: HashSet<&str> = drafts.iter().map(|d| d.email.as_str()).collect();
        assert_eq!(emails.len(), drafts.len());
    }

    #[test]
    fn test_generated_drafts_are_valid() {
        for draft in generate_seed_drafts(30) {
            assert!(validate_draft(&draft).is_ok(), "invalid draft: {draft:?}");
            assert!(!draft.liked_recipes.is_empty());
            assert!(draft.authored_recipes.len() <= 2);
        }
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(generate_seed_drafts(10), generate_seed_drafts(10));
    }
}
