//! Business logic and trait definitions for flowprobe.
//!
//! This crate defines the "ports" (secret providers, probe runners) that the
//! infrastructure layer implements, plus the pure logic around them: payload
//! construction, outcome classification and report rendering. It depends
//! only on `flowprobe-types` -- never on `flowprobe-infra` or any process/IO
//! crate.

pub mod payload;
pub mod probe;
pub mod report;
pub mod secret;
