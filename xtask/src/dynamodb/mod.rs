//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use std::sync::Arc;

use crate::prelude::*;
use dialoguer::Confirm;
use recipebox::service::ProfileService;
use recipebox::storage::DynamoDbRepository;
use recipebox_core::profile::generate_seed_drafts;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the profile table.
    Deploy(DeployCommand),

    /// Seed the profile table with generated profiles.
    Seed(SeedCommand),
}

/// Deploy or destroy the profile table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the profile table.

By default, this command creates the recipebox DynamoDB table keyed by
the string attribute `id`. An existing table with any other key schema
is reported and left untouched.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, env = "DYNAMODB_TABLE_NAME", default_value = "recipebox")]
    pub table_name: String,
}

/// Seed the profile table with generated profiles.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo profiles into DynamoDB.

Every profile goes through the same insert path the server uses and
gets a fresh id. Names and emails are deterministic for a given count;
emails are unique within a run.")]
pub struct SeedCommand {
    /// Number of profiles to generate.
    #[arg(long, default_value = "10")]
    pub count: u32,

    /// Table name to use.
    #[arg(long, env = "DYNAMODB_TABLE_NAME", default_value = "recipebox")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let connection = client::connection_config(&cmd.table_name);

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), connection.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&connection).await?;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        // Destroy flow
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete this table? ALL DATA WILL BE LOST")
                .default(false)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
    } else {
        // Deploy flow
        let table_config = config::profile_table_config().with_table_name(&cmd.table_name);

        let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in planning::format_deploy_plan(&plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else if line.starts_with('!') {
                    aprintln!("  {}", p_r(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        match plan {
            planning::DeployPlan::NoChanges { .. } => {
                if !global.is_silent() {
                    aprintln!("{}", p_g("Infrastructure is up to date."));
                }
                return Ok(());
            }
            planning::DeployPlan::IncompatibleKeySchema { table_name, found } => {
                return Err(DynamodbError::IncompatibleKeySchema { table_name, found });
            }
            planning::DeployPlan::CreateTable { .. } => {}
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Apply these changes?")
                .default(true)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Applying changes..."));
        }

        deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let connection = client::connection_config(&cmd.table_name);

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), connection.target_display());
        aprintln!("{} {}", p_b("Table:"), cmd.table_name);
        aprintln!("{} {}", p_b("Profile count:"), cmd.count);
        aprintln!();
    }

    let dynamo_client = client::create_client(&connection).await?;

    // Verify table exists
    let table_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;
    if table_state.is_none() {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let drafts = generate_seed_drafts(cmd.count);
    let problems = seed::invalid_drafts(&drafts);
    if !problems.is_empty() {
        return Err(DynamodbError::InvalidSeed(problems.join("; ")));
    }

    if !global.is_silent() {
        aprintln!("{}", p_c("Profiles to create:"));
        for draft in drafts.iter().take(5) {
            aprintln!("  {}", seed::format_draft(draft));
        }
        if drafts.len() > 5 {
            aprintln!("  ... and {} more", drafts.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {} profiles?", drafts.len()))
            .default(true)
            .interact()
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        if !confirmed {
            return Err(DynamodbError::UserCancelled);
        }
    }

    let repo = DynamoDbRepository::new(dynamo_client, cmd.table_name.clone());
    let service = ProfileService::new(Arc::new(repo));
    let inserted = seed::seed_profiles(&service, drafts).await?;

    if !global.is_silent() {
        aprintln!("{} {} profiles inserted.", p_g("Success:"), inserted.len());
        if global.is_verbose() {
            for profile in &inserted {
                aprintln!("  {} {}", p_m(&profile.id), profile.email);
            }
        }
    }

    Ok(())
}
