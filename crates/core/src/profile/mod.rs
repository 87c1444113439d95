mod error;
mod mock_data;
mod operations;
mod types;

pub use error::ProfileError;
pub use mock_data::generate_seed_drafts;
pub use operations::{compose_profile, validate_draft};
pub use types::{Profile, ProfileDraft};
