//! Record operations over a `ProfileRepository`.
//!
//! Each operation is one store round trip (list is a chain of scan pages) with
//! an optional deadline per round trip. A missing record comes back as
//! `Ok(None)`, never as an error.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use recipebox_core::ids::{IdGenerator, UuidGenerator};
use recipebox_core::profile::{compose_profile, Profile, ProfileDraft};
use recipebox_core::storage::{
    collect_pages, pages, ProfileRepository, RepositoryError, Result,
};

/// Profile operations bound to one repository.
///
/// Cheap to clone and safe to share between tasks; it carries no per-call state.
#[derive(Clone)]
pub struct ProfileService {
    repo: Arc<dyn ProfileRepository>,
    ids: Arc<dyn IdGenerator>,
    request_timeout: Option<Duration>,
    scan_page_size: Option<u32>,
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService")
            .field("request_timeout", &self.request_timeout)
            .field("scan_page_size", &self.scan_page_size)
            .finish_non_exhaustive()
    }
}

impl ProfileService {
    /// Creates a service with UUID ids, no deadline and store-sized scan pages.
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self {
            repo,
            ids: Arc::new(UuidGenerator),
            request_timeout: None,
            scan_page_size: None,
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Bounds every store round trip. An expired deadline aborts the request
    /// and surfaces `RepositoryError::Timeout`.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Requests at most `page_size` items per scan page. Zero is raised to one;
    /// the store rejects a zero limit.
    pub fn with_scan_page_size(mut self, page_size: u32) -> Self {
        self.scan_page_size = Some(page_size.max(1));
        self
    }

    /// Looks up a profile by id.
    pub async fn get(&self, id: &str) -> Result<Option<Profile>> {
        self.deadline("GetItem", self.repo.get_profile(id)).await
    }

    /// Reads the whole table, following continuation tokens until the last page.
    ///
    /// If any page fails the partial result is dropped and the error returned.
    /// No further pages are requested after a page misses its deadline.
    pub async fn list(&self) -> Result<Vec<Profile>> {
        let stream = pages(self.repo.as_ref(), None, self.scan_page_size);
        let profiles = collect_pages(stream, self.request_timeout).await?;

        tracing::debug!(count = profiles.len(), "Listed profiles");
        Ok(profiles)
    }

    /// Stores a new profile under a freshly generated id.
    ///
    /// The returned record is the one composed locally and written as is.
    pub async fn insert(&self, draft: ProfileDraft) -> Result<Profile> {
        let profile = compose_profile(self.ids.generate(), draft);
        self.deadline("PutItem", self.repo.put_profile(&profile))
            .await?;

        tracing::debug!(profile_id = %profile.id, "Inserted profile");
        Ok(profile)
    }

    /// Deletes a profile and returns it, or `None` when the id had no item.
    pub async fn delete(&self, id: &str) -> Result<Option<Profile>> {
        let deleted = self
            .deadline("DeleteItem", self.repo.delete_profile(id))
            .await?;

        if deleted.is_some() {
            tracing::debug!(profile_id = %id, "Deleted profile");
        }
        Ok(deleted)
    }

    /// Replaces every non-key field of an existing profile.
    ///
    /// The existence check is part of the same atomic write. `None` means no
    /// profile has this id; nothing was created.
    pub async fn update(&self, id: &str, draft: &ProfileDraft) -> Result<Option<Profile>> {
        let outcome = self
            .deadline("UpdateItem", self.repo.update_profile(id, draft))
            .await?;

        let updated = outcome.applied();
        if updated.is_some() {
            tracing::debug!(profile_id = %id, "Updated profile");
        }
        Ok(updated)
    }

    async fn deadline<T>(
        &self,
        operation: &'static str,
        request: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        match self.request_timeout {
            Some(timeout) => tokio::time::timeout(timeout, request)
                .await
                .map_err(|_| {
                    tracing::warn!(operation, ?timeout, "Store request timed out");
                    RepositoryError::Timeout { operation }
                })?,
            None => request.await,
        }
    }
}
