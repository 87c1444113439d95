//! CLI command definitions.

pub mod health;
pub mod profiles;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the recipebox API.
#[derive(Debug, Parser)]
#[command(name = "recipebox-client")]
#[command(about = "CLI client for the recipebox API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "RECIPEBOX_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Profile management.
    Profiles(profiles::ProfilesCommand),
    /// Server liveness check.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::profiles::ProfilesAction;

    #[test]
    fn test_parse_profile_create() {
        let cli = Cli::try_parse_from([
            "recipebox-client",
            "--format",
            "json",
            "profiles",
            "create",
            "--fullname",
            "Ada Lovelace",
            "--email",
            "ada@example.com",
            "--authored-recipe",
            "seed-cake",
            "--liked-recipe",
            "ramen",
            "--liked-recipe",
            "pho",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        let Commands::Profiles(profiles) = cli.command else {
            panic!("expected profiles command");
        };
        let ProfilesAction::Create(fields) = profiles.action else {
            panic!("expected create action");
        };
        let draft = fields.into_draft();
        assert_eq!(draft.full_name, "Ada Lovelace");
        assert_eq!(draft.authored_recipes, vec!["seed-cake"]);
        assert_eq!(draft.liked_recipes, vec!["ramen", "pho"]);
    }

    #[test]
    fn test_update_requires_id() {
        let result = Cli::try_parse_from([
            "recipebox-client",
            "profiles",
            "update",
            "--fullname",
            "Ada",
            "--email",
            "ada@example.com",
        ]);

        assert!(result.is_err());
    }
}
