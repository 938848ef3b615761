use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::version::VersionNumber;

/// Everything needed to identify and describe a publication: the Maven
/// coordinates plus the descriptive fields that end up in the POM.
#[derive(Debug, Clone)]
pub struct PublishInfo {
    pub group_id: String,
    pub artifact_id: String,
    pub version: VersionNumber,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub licenses: Vec<License>,
    pub developers: Vec<Developer>,
    pub scm: Option<Scm>,
}

impl PublishInfo {
    /// Create a descriptor with bare coordinates and no POM extras.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: VersionNumber,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version,
            name: None,
            description: None,
            url: None,
            licenses: Vec::new(),
            developers: Vec::new(),
            scm: None,
        }
    }
}

/// A single file to publish, with its Maven naming attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishArtifact {
    pub file: PathBuf,
    pub classifier: Option<String>,
    /// Extension under which the file is stored; `jar` when unset.
    pub type_: Option<String>,
}

impl PublishArtifact {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            classifier: None,
            type_: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    /// Parse a `path[:classifier[:type]]` artifact spec.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.splitn(3, ':');
        let file = parts.next()?;
        if file.is_empty() {
            return None;
        }
        let mut artifact = Self::new(file);
        if let Some(classifier) = parts.next() {
            if !classifier.is_empty() {
                artifact.classifier = Some(classifier.to_string());
            }
        }
        if let Some(type_) = parts.next() {
            if !type_.is_empty() {
                artifact.type_ = Some(type_.to_string());
            }
        }
        Some(artifact)
    }

    /// Effective repository extension (`jar` when unset).
    pub fn extension(&self) -> &str {
        self.type_.as_deref().unwrap_or("jar")
    }

    /// Repository file name for this artifact at the given (possibly
    /// timestamped) version: `{artifact_id}-{version}[-{classifier}].{ext}`.
    pub fn file_name(&self, artifact_id: &str, version: &VersionNumber) -> String {
        let mut name = format!("{artifact_id}-{version}");
        if let Some(ref classifier) = self.classifier {
            name.push('-');
            name.push_str(classifier);
        }
        name.push('.');
        name.push_str(self.extension());
        name
    }
}

/// A license declared in the publication POM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A developer listed in the publication POM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Source control references for the publication POM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scm {
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default, rename = "developer-connection")]
    pub developer_connection: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
