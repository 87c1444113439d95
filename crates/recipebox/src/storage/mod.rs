//! Storage backend implementations.
//!
//! This module provides concrete implementations of `ProfileRepository`
//! defined in `recipebox_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always built; it backs the tests and the
//! `--storage memory` server mode.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p recipebox
//! ```
//!
//! Build without the AWS SDK:
//! ```bash
//! cargo build -p recipebox --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbConfig, DynamoDbRepository};

pub use inmemory::InMemoryRepository;
