use serde::{Deserialize, Serialize};

/// A persisted recipebox profile.
///
/// `id` is the table's primary key. It is assigned once on insert and never
/// changes afterwards. Field names on the wire match the attribute names stored
/// in DynamoDB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(rename = "fullname")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "authoredRecipes")]
    pub authored_recipes: Vec<String>,
    #[serde(rename = "likedRecipes")]
    pub liked_recipes: Vec<String>,
}

impl Profile {
    /// Returns the non-key attributes of this profile as a draft.
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            authored_recipes: self.authored_recipes.clone(),
            liked_recipes: self.liked_recipes.clone(),
        }
    }
}

/// The caller-supplied attributes for creating or replacing a profile.
///
/// Every field is required; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(rename = "fullname")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "authoredRecipes")]
    pub authored_recipes: Vec<String>,
    #[serde(rename = "likedRecipes")]
    pub liked_recipes: Vec<String>,
}

impl ProfileDraft {
    /// Creates a draft with empty recipe lists.
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            authored_recipes: Vec::new(),
            liked_recipes: Vec::new(),
        }
    }

    /// Sets the recipes authored by this profile.
    pub fn with_authored_recipes<I, S>(mut self, recipes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authored_recipes = recipes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the recipes liked by this profile.
    pub fn with_liked_recipes<I, S>(mut self, recipes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.liked_recipes = recipes.into_iter().map(Into::into).collect();
        self
    }
}
