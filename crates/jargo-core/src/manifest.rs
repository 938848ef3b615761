use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::dependency::Dependency;
use crate::publish::{Developer, License, Scm};

/// The parsed representation of a `Jargo.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    #[serde(default)]
    pub dependencies: BTreeMap<String, Dependency>,

    #[serde(default, rename = "dev-dependencies")]
    pub dev_dependencies: BTreeMap<String, Dependency>,

    #[serde(default)]
    pub repositories: BTreeMap<String, RepositoryEntry>,

    #[serde(default)]
    pub publish: Option<PublishConfig>,

    #[serde(default)]
    pub test: Option<TestConfig>,
}

/// Package identity and metadata from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    /// Maven group id of this package, e.g. `com.example`.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A Maven repository reference, either a URL string or a detailed
/// configuration with credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryEntry {
    Url(String),
    Detailed {
        url: String,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
    },
}

/// Publication configuration from the `[publish]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Name of a `[repositories]` entry, or a bare URL/path, to publish to.
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub developers: Vec<Developer>,
    #[serde(default)]
    pub scm: Option<Scm>,
    /// Artifact specs (`path[:classifier[:type]]`) to publish. When empty,
    /// the default distribution jar is published.
    #[serde(default)]
    pub artifacts: Vec<String>,
}

/// Test run configuration from the `[test]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestConfig {
    #[serde(default, rename = "main-class")]
    pub main_class: Option<String>,
    /// Launcher executable; defaults to `java`.
    #[serde(default)]
    pub tool: Option<String>,
    #[serde(default, rename = "java-options")]
    pub java_options: Vec<String>,
    #[serde(default)]
    pub classpath: Vec<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Manifest {
    /// Load and parse a `Jargo.toml` file from the given path.
    ///
    /// Before parsing, `${env:VAR}` references in the manifest content are
    /// resolved using `.jargo.env` (if present alongside `Jargo.toml`) and
    /// process environment variables.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            jargo_util::errors::JargoError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;

        let dir = path.parent().unwrap_or(Path::new("."));
        let env_vars =
            crate::properties::load_env_file(&dir.join(".jargo.env")).unwrap_or_default();
        let resolved = crate::properties::interpolate(&content, &env_vars);

        Self::parse_toml(&resolved)
    }

    /// Parse a `Jargo.toml` from a string (no interpolation).
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            jargo_util::errors::JargoError::Manifest {
                message: format!("Failed to parse Jargo.toml: {e}"),
            }
            .into()
        })
    }
}
