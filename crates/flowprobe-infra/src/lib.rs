//! Infrastructure layer for flowprobe.
//!
//! Contains implementations of the traits defined in `flowprobe-core`:
//! the container runtime runner, OS keychain and environment secret
//! providers, plus configuration loading and filesystem helpers.

pub mod config;
pub mod container;
pub mod filesystem;
pub mod keychain;
pub mod secret;
