//! Shared domain types for flowprobe.
//!
//! This crate contains the domain types used across the workspace: the
//! workflow payload, probe results and reports, configuration, secret
//! metadata, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod probe;
pub mod secret;
pub mod workflow;
