//! recipebox_client - CLI client for the recipebox API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::RecipeboxClient;
pub use error::{ClientError, Result};
