use async_trait::async_trait;

use crate::profile::{Profile, ProfileDraft};

use super::{ConditionalUpdate, Page, Result, ScanRequest};

/// Storage adapter for profiles.
///
/// Every method is a single round trip to the backing store. Implementations
/// hold no per-call state and must be safe to share across tasks.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Point lookup by primary key. `Ok(None)` when no item has the key.
    async fn get_profile(&self, id: &str) -> Result<Option<Profile>>;

    /// Reads one page of a full-table scan.
    async fn scan_profiles(&self, request: ScanRequest) -> Result<Page<Profile>>;

    /// Writes the full record unconditionally.
    async fn put_profile(&self, profile: &Profile) -> Result<()>;

    /// Deletes unconditionally and returns the prior record, if there was one.
    async fn delete_profile(&self, id: &str) -> Result<Option<Profile>>;

    /// Replaces every non-key attribute in one atomic write, guarded by the
    /// condition that an item with `id` exists. Returns the record as stored
    /// after the write.
    async fn update_profile(
        &self,
        id: &str,
        draft: &ProfileDraft,
    ) -> Result<ConditionalUpdate<Profile>>;
}
