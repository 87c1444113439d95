mod error;
mod http_mapping;
mod pagination;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use pagination::{collect_pages, pages};
pub use traits::ProfileRepository;
pub use types::{ConditionalUpdate, Page, PageToken, ScanRequest};
