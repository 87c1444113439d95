//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `ProfileRepository`
//! that stores profiles in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. It backs
//! the test suite and the `--storage memory` server mode.
//!
//! # Example
//!
//! ```rust,ignore
//! use recipebox::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new().with_page_size(2);
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
