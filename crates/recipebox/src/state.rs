//! Shared application state.

use std::sync::Arc;

use recipebox_core::storage::ProfileRepository;

use crate::{config::Config, service::ProfileService, storage::InMemoryRepository};

/// Shared application state.
///
/// Cloned for each request handler. Holds the profile service, which owns the
/// repository trait object for whichever backend was selected at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub profiles: ProfileService,
}

impl AppState {
    /// Creates state over `repo`, applying the store deadline and scan page size
    /// from `config`.
    pub fn new(repo: Arc<dyn ProfileRepository>, config: &Config) -> Self {
        let mut profiles = ProfileService::new(repo).with_request_timeout(config.store_timeout());
        if let Some(page_size) = config.scan_page_size {
            profiles = profiles.with_scan_page_size(page_size);
        }
        Self { profiles }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self {
            profiles: ProfileService::new(Arc::new(InMemoryRepository::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
