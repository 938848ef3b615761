//! Maven-style version numbers with snapshot awareness.
//!
//! A version carries up to three numeric components and an optional
//! qualifier. Ordering follows the Maven conventions relevant here:
//! - missing numeric components compare as zero (`1.0` equals `1.0.0`)
//! - a qualified version sorts before its unqualified release
//! - qualifiers compare lexically, case-insensitive
//! - the `SNAPSHOT` qualifier (any case) marks a snapshot version

use std::cmp::Ordering;
use std::fmt;

/// A version number of the form `major[.minor[.revision]][-qualifier]`.
#[derive(Debug, Clone)]
pub struct VersionNumber {
    pub major: u64,
    pub minor: Option<u64>,
    pub revision: Option<u64>,
    pub qualifier: Option<String>,
}

impl VersionNumber {
    /// Create a release version from explicit numeric components.
    pub fn new(major: u64, minor: u64, revision: u64) -> Self {
        Self {
            major,
            minor: Some(minor),
            revision: Some(revision),
            qualifier: None,
        }
    }

    /// Parse `major[.minor[.revision]][-qualifier]`.
    ///
    /// The qualifier starts at the first `-` and may itself contain dashes
    /// (snapshot qualifiers like `20230329.225432-1` do). Returns `None`
    /// for anything that does not fit the shape.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        let (numbers, qualifier) = match s.split_once('-') {
            Some((_, "")) => return None,
            Some((numbers, qualifier)) => (numbers, Some(qualifier.to_string())),
            None => (s, None),
        };
        let mut parts = numbers.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(part) => Some(part.parse().ok()?),
            None => None,
        };
        let revision = match parts.next() {
            Some(part) => Some(part.parse().ok()?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            major,
            minor,
            revision,
            qualifier,
        })
    }

    /// Whether this is a snapshot version (qualifier is `SNAPSHOT`, any case).
    pub fn is_snapshot(&self) -> bool {
        match self.qualifier.as_deref() {
            Some(qualifier) => qualifier.eq_ignore_ascii_case("snapshot"),
            None => false,
        }
    }

    /// The same numeric components with a different qualifier.
    pub fn with_qualifier(&self, qualifier: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            ..self.clone()
        }
    }

    /// The numeric components without any qualifier.
    pub fn base_version(&self) -> Self {
        Self {
            qualifier: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(revision) = self.revision {
            write!(f, ".{revision}")?;
        }
        if let Some(ref qualifier) = self.qualifier {
            write!(f, "-{qualifier}")?;
        }
        Ok(())
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let numbers = (
            self.major,
            self.minor.unwrap_or(0),
            self.revision.unwrap_or(0),
        )
            .cmp(&(
                other.major,
                other.minor.unwrap_or(0),
                other.revision.unwrap_or(0),
            ));
        if numbers != Ordering::Equal {
            return numbers;
        }
        match (self.qualifier.as_deref(), other.qualifier.as_deref()) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionNumber {}
