//! Profile CLI commands.

use clap::{Args, Parser, Subcommand};
use recipebox_core::profile::ProfileDraft;

/// Profile management commands.
#[derive(Debug, Parser)]
pub struct ProfilesCommand {
    #[command(subcommand)]
    pub action: ProfilesAction,
}

/// Available profile actions.
#[derive(Debug, Subcommand)]
pub enum ProfilesAction {
    /// List all profiles.
    List,
    /// Create a new profile.
    Create(ProfileFields),
    /// Get profile by ID.
    Get {
        /// Profile ID.
        id: String,
    },
    /// Replace every field of an existing profile.
    Update {
        /// Profile ID.
        id: String,
        #[command(flatten)]
        fields: ProfileFields,
    },
    /// Delete profile by ID.
    Delete {
        /// Profile ID.
        id: String,
    },
}

/// The full set of profile attributes; updates replace all of them.
#[derive(Debug, Args)]
pub struct ProfileFields {
    /// Full name.
    #[arg(long)]
    pub fullname: String,
    /// Email address.
    #[arg(long)]
    pub email: String,
    /// Recipe written by this cook (repeatable).
    #[arg(long = "authored-recipe")]
    pub authored_recipes: Vec<String>,
    /// Recipe this cook likes (repeatable).
    #[arg(long = "liked-recipe")]
    pub liked_recipes: Vec<String>,
}

impl ProfileFields {
    pub fn into_draft(self) -> ProfileDraft {
        ProfileDraft::new(self.fullname, self.email)
            .with_authored_recipes(self.authored_recipes)
            .with_liked_recipes(self.liked_recipes)
    }
}
