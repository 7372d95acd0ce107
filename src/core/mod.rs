//! Core plumbing for depcheck
//!
//! - **config**: deps.toml parsing and CLI flag merging
//! - **error**: error types with contextual help messages and exit codes

pub mod config;
pub mod error;
