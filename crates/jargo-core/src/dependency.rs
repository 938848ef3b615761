use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dependency specification in Jargo.toml.
///
/// Supports both shorthand (`"group:artifact:version"`) and detailed forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    Short(String),
    Detailed(DetailedDependency),
}

impl Dependency {
    /// Normalize into the detailed form.
    ///
    /// Shorthand strings that do not parse as coordinates yield `None`.
    pub fn to_detailed(&self) -> Option<DetailedDependency> {
        match self {
            Dependency::Short(spec) => {
                let coordinate = MavenCoordinate::parse(spec)?;
                Some(DetailedDependency {
                    group: coordinate.group_id,
                    artifact: coordinate.artifact_id,
                    version: coordinate.version,
                    scope: None,
                    optional: false,
                    exclusions: Vec::new(),
                    classifier: None,
                    type_: None,
                })
            }
            Dependency::Detailed(detailed) => Some(detailed.clone()),
        }
    }
}

/// A dependency with explicit group, artifact, version, and optional metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedDependency {
    pub group: String,
    pub artifact: String,
    pub version: String,
    #[serde(default)]
    pub scope: Option<DependencyScope>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub exclusions: Vec<Exclusion>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default, rename = "type")]
    pub type_: Option<String>,
}

/// A transitive dependency to exclude.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exclusion {
    pub group: String,
    #[serde(default)]
    pub artifact: Option<String>,
}

/// Maven-compatible dependency scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Compile,
    Runtime,
    Provided,
    Test,
}

impl Default for DependencyScope {
    fn default() -> Self {
        Self::Compile
    }
}

impl DependencyScope {
    /// The POM `<scope>` tag value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Runtime => "runtime",
            Self::Provided => "provided",
            Self::Test => "test",
        }
    }

    /// All scopes, in document emission order.
    pub const ALL: [DependencyScope; 4] = [
        Self::Compile,
        Self::Runtime,
        Self::Provided,
        Self::Test,
    ];
}

/// Scope-keyed dependency declarations assembled for publication.
///
/// Merging is additive only: a `(group, artifact)` pair already present in
/// a scope is never overwritten and never duplicated.
#[derive(Debug, Clone, Default)]
pub struct DependencyScopes {
    scopes: BTreeMap<DependencyScope, Vec<DetailedDependency>>,
}

impl DependencyScopes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency to a scope unless the same `(group, artifact)` pair
    /// is already registered there.
    pub fn add(&mut self, scope: DependencyScope, dependency: DetailedDependency) {
        let entries = self.scopes.entry(scope).or_default();
        let already_present = entries
            .iter()
            .any(|d| d.group == dependency.group && d.artifact == dependency.artifact);
        if !already_present {
            entries.push(dependency);
        }
    }

    /// Merge all declarations from `other` into this set, scope by scope.
    pub fn include(&mut self, other: &DependencyScopes) {
        for (scope, dependencies) in &other.scopes {
            for dependency in dependencies {
                self.add(*scope, dependency.clone());
            }
        }
    }

    /// Declarations registered in one scope, in insertion order.
    pub fn scope(&self, scope: DependencyScope) -> &[DetailedDependency] {
        self.scopes.get(&scope).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.values().all(Vec::is_empty)
    }
}

/// Maven coordinates parsed from a shorthand string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl MavenCoordinate {
    /// Parse `"group:artifact:version"` into coordinates.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() == 3 {
            Some(Self {
                group_id: parts[0].to_string(),
                artifact_id: parts[1].to_string(),
                version: parts[2].to_string(),
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
