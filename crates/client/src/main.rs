//! recipebox-client CLI entry point.

use clap::Parser;
use recipebox_client::cli::health::HealthCommand;
use recipebox_client::cli::profiles::ProfilesAction;
use recipebox_client::cli::{Cli, Commands};
use recipebox_client::client::RecipeboxClient;
use recipebox_client::output::{pretty, render};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RecipeboxClient::new(&cli.base_url);

    match cli.command {
        Commands::Profiles(profiles_cmd) => match profiles_cmd.action {
            ProfilesAction::List => {
                let profiles = client.list_profiles().await?;
                println!(
                    "{}",
                    render(profiles.as_slice(), cli.format, pretty::format_profiles)
                );
            }
            ProfilesAction::Create(fields) => {
                let profile = client.create_profile(&fields.into_draft()).await?;
                println!(
                    "{}",
                    render(&profile, cli.format, |p| format!(
                        "Created:\n{}",
                        pretty::format_profile(p)
                    ))
                );
            }
            ProfilesAction::Get { id } => {
                let profile = client.get_profile(&id).await?;
                println!("{}", render(&profile, cli.format, pretty::format_profile));
            }
            ProfilesAction::Update { id, fields } => {
                let profile = client.update_profile(&id, &fields.into_draft()).await?;
                println!(
                    "{}",
                    render(&profile, cli.format, |p| format!(
                        "Updated:\n{}",
                        pretty::format_profile(p)
                    ))
                );
            }
            ProfilesAction::Delete { id } => {
                let profile = client.delete_profile(&id).await?;
                if !cli.quiet {
                    println!(
                        "{}",
                        render(&profile, cli.format, |p| format!("Deleted profile {}", p.id))
                    );
                }
            }
        },
        Commands::Health(HealthCommand {}) => {
            let health = client.health().await?;
            println!(
                "{}",
                render(&health, cli.format, |h| format!("Server status: {}", h.status))
            );
        }
    }

    Ok(())
}
