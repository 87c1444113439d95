//! Profile records over DynamoDB, with a small JSON API.
//!
//! [`service::ProfileService`] is the entry point for the record operations;
//! [`app::create_app`] exposes them over HTTP.

pub mod app;
pub mod config;
pub mod handlers;
pub mod service;
pub mod state;
pub mod storage;
