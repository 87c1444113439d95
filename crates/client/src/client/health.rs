//! Health check operations.

use super::RecipeboxClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Liveness response.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl RecipeboxClient {
    /// Check that the server answers.
    pub async fn health(&self) -> Result<Health> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response, "healthz").await
    }
}
