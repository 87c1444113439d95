//! Profile API operations.

use super::RecipeboxClient;
use crate::error::{ClientError, Result};
use recipebox_core::profile::{Profile, ProfileDraft};

impl RecipeboxClient {
    /// List all profiles.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let response = self.client.get(self.url("/api/profiles")).send().await?;
        self.handle_response(response, "profiles").await
    }

    /// Create a new profile; the server assigns the id.
    pub async fn create_profile(&self, draft: &ProfileDraft) -> Result<Profile> {
        let response = self
            .client
            .post(self.url("/api/profiles"))
            .json(draft)
            .send()
            .await?;
        self.handle_response(response, "profiles").await
    }

    /// Get profile by ID.
    pub async fn get_profile(&self, id: &str) -> Result<Profile> {
        let response = self.client.get(self.profile_url(id)?).send().await?;
        self.handle_response(response, &format!("profile {id}")).await
    }

    /// Replace an existing profile.
    pub async fn update_profile(&self, id: &str, draft: &ProfileDraft) -> Result<Profile> {
        let response = self
            .client
            .put(self.profile_url(id)?)
            .json(draft)
            .send()
            .await?;
        self.handle_response(response, &format!("profile {id}")).await
    }

    /// Delete profile by ID, returning the removed record.
    pub async fn delete_profile(&self, id: &str) -> Result<Profile> {
        let response = self.client.delete(self.profile_url(id)?).send().await?;
        self.handle_response(response, &format!("profile {id}")).await
    }

    fn profile_url(&self, id: &str) -> Result<String> {
        if id.trim().is_empty() || id.contains('/') {
            return Err(ClientError::InvalidInput(format!(
                "invalid profile id: {id:?}"
            )));
        }
        Ok(self.url(&format!("/api/profiles/{id}")))
    }
}
