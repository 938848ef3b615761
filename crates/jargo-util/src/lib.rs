//! Shared utilities for the Jargo task suite.
//!
//! This crate provides cross-cutting concerns used by all other Jargo crates:
//! error types, filesystem helpers, process spawning, and terminal progress
//! indicators.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "Jargo.toml";
