//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `ProfileRepository`
//! using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod expressions;
mod repository;

pub use client::{create_client, DynamoDbConfig};
pub use repository::DynamoDbRepository;
