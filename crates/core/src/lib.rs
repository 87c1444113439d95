//! Functional core for recipebox.
//!
//! Pure types and functions shared by the server, the CLI client and the
//! xtask tooling. Nothing in this crate performs I/O; storage backends live
//! in the `recipebox` crate and plug in through [`storage::ProfileRepository`].

pub mod ids;
pub mod profile;
pub mod storage;
