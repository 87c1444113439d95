//! Health CLI commands.

use clap::Parser;

/// Checks that the server is accepting requests.
#[derive(Debug, Parser)]
pub struct HealthCommand {}
