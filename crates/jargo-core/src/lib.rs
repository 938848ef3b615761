//! Core data types for the Jargo task suite.
//!
//! This crate defines the fundamental types that represent a Jargo project:
//! manifest parsing, dependency declarations, Maven-style version numbers,
//! publication descriptors, and local properties.
//!
//! This crate is intentionally free of async code and network I/O.

/// Default tool used to launch test runs.
pub const DEFAULT_JAVA_TOOL: &str = "java";

pub mod dependency;
pub mod manifest;
pub mod properties;
pub mod publish;
pub mod version;
