//! Maven repository protocol: repository layout, metadata documents, POM
//! generation, artifact checksums, uploads, and authentication.

pub mod auth;
pub mod checksum;
pub mod download;
pub mod metadata;
pub mod pom;
pub mod repository;
pub mod upload;
