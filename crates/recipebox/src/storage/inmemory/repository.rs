//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use recipebox_core::profile::{Profile, ProfileDraft};
use recipebox_core::storage::{
    ConditionalUpdate, Page, PageToken, ProfileRepository, Result, ScanRequest,
};

/// In-memory storage backend.
///
/// Profiles are kept ordered by id, so scans are stable. `page_size` caps every
/// scan page the way DynamoDB caps pages by size, independent of the caller's
/// limit. Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    profiles: Arc<RwLock<BTreeMap<String, Profile>>>,
    page_size: Option<usize>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(BTreeMap::new())),
            page_size: None,
        }
    }

    /// Caps the number of items returned by each scan page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Number of stored profiles.
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    fn effective_limit(&self, requested: Option<u32>) -> usize {
        let requested = requested.map(|l| l.max(1) as usize);
        match (requested, self.page_size) {
            (Some(r), Some(p)) => r.min(p),
            (Some(r), None) => r,
            (None, Some(p)) => p,
            (None, None) => usize::MAX,
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryRepository {
    async fn get_profile(&self, id: &str) -> Result<Option<Profile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(id).cloned())
    }

    async fn scan_profiles(&self, request: ScanRequest) -> Result<Page<Profile>> {
        let limit = self.effective_limit(request.limit);
        let profiles = self.profiles.read().await;

        let lower = match &request.start {
            Some(token) => Bound::Excluded(token.as_str()),
            None => Bound::Unbounded,
        };
        let mut remaining = profiles
            .range::<str, _>((lower, Bound::Unbounded))
            .map(|(_, profile)| profile);

        let items: Vec<Profile> = remaining.by_ref().take(limit).cloned().collect();
        let next = match (items.last(), remaining.next()) {
            (Some(last), Some(_)) => Some(PageToken::new(last.id.clone())),
            _ => None,
        };

        Ok(Page { items, next })
    }

    async fn put_profile(&self, profile: &Profile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn delete_profile(&self, id: &str) -> Result<Option<Profile>> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles.remove(id))
    }

    async fn update_profile(
        &self,
        id: &str,
        draft: &ProfileDraft,
    ) -> Result<ConditionalUpdate<Profile>> {
        // Condition check and write happen under one write lock.
        let mut profiles = self.profiles.write().await;
        let Some(profile) = profiles.get_mut(id) else {
            return Ok(ConditionalUpdate::ConditionFailed);
        };

        profile.full_name = draft.full_name.clone();
        profile.email = draft.email.clone();
        profile.authored_recipes = draft.authored_recipes.clone();
        profile.liked_recipes = draft.liked_recipes.clone();

        Ok(ConditionalUpdate::Applied(profile.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, name: &str) -> Profile {
        Profile {
            id: id.to_string(),
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            authored_recipes: vec![],
            liked_recipes: vec![],
        }
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let ada = profile("p-1", "Ada");

        repo.put_profile(&ada).await.unwrap();

        assert_eq!(repo.get_profile("p-1").await.unwrap(), Some(ada));
        assert_eq!(repo.get_profile("p-2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let repo = InMemoryRepository::new();
        repo.put_profile(&profile("p-1", "Ada")).await.unwrap();
        repo.put_profile(&profile("p-1", "Grace")).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(
            repo.get_profile("p-1").await.unwrap().unwrap().full_name,
            "Grace"
        );
    }

    #[tokio::test]
    async fn test_delete_returns_prior_record() {
        let repo = InMemoryRepository::new();
        let ada = profile("p-1", "Ada");
        repo.put_profile(&ada).await.unwrap();

        assert_eq!(repo.delete_profile("p-1").await.unwrap(), Some(ada));
        assert_eq!(repo.delete_profile("p-1").await.unwrap(), None);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_missing_key_fails_condition() {
        let repo = InMemoryRepository::new();
        let draft = ProfileDraft::new("Ada", "ada@example.com");

        let outcome = repo.update_profile("missing", &draft).await.unwrap();

        assert_eq!(outcome, ConditionalUpdate::ConditionFailed);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_replaces_non_key_fields() {
        let repo = InMemoryRepository::new();
        repo.put_profile(&profile("p-1", "Ada")).await.unwrap();
        let draft = ProfileDraft::new("Grace", "grace@example.com").with_liked_recipes(["pho"]);

        let outcome = repo.update_profile("p-1", &draft).await.unwrap();

        let expected = Profile {
            id: "p-1".to_string(),
            full_name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            authored_recipes: vec![],
            liked_recipes: vec!["pho".to_string()],
        };
        assert_eq!(outcome, ConditionalUpdate::Applied(expected.clone()));
        assert_eq!(repo.get_profile("p-1").await.unwrap(), Some(expected));
    }

    #[tokio::test]
    async fn test_scan_pages_follow_tokens() {
        let repo = InMemoryRepository::new().with_page_size(2);
        for i in 0..5 {
            repo.put_profile(&profile(&format!("p-{i}"), "Cook"))
                .await
                .unwrap();
        }

        let first = repo.scan_profiles(ScanRequest::first(None)).await.unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.next, Some(PageToken::new("p-1")));

        let second = repo
            .scan_profiles(ScanRequest::after(PageToken::new("p-1"), None))
            .await
            .unwrap();
        assert_eq!(second.items[0].id, "p-2");

        let last = repo
            .scan_profiles(ScanRequest::after(PageToken::new("p-3"), None))
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.next, None);
    }

    #[tokio::test]
    async fn test_scan_limit_is_capped_by_page_size() {
        let repo = InMemoryRepository::new().with_page_size(3);
        for i in 0..10 {
            repo.put_profile(&profile(&format!("p-{i}"), "Cook"))
                .await
                .unwrap();
        }

        let capped = repo.scan_profiles(ScanRequest::first(Some(8))).await.unwrap();
        assert_eq!(capped.items.len(), 3);

        let smaller = repo.scan_profiles(ScanRequest::first(Some(2))).await.unwrap();
        assert_eq!(smaller.items.len(), 2);
    }

    #[tokio::test]
    async fn test_scan_exact_fit_has_no_next_token() {
        let repo = InMemoryRepository::new().with_page_size(2);
        repo.put_profile(&profile("p-0", "Ada")).await.unwrap();
        repo.put_profile(&profile("p-1", "Grace")).await.unwrap();

        let page = repo.scan_profiles(ScanRequest::first(None)).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next, None);
    }
}
