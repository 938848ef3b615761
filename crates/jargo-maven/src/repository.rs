//! Maven repository abstraction: URL layout, local-vs-remote targets,
//! credentials.

use std::path::{Path, PathBuf};

use jargo_core::manifest::RepositoryEntry;

/// A publication target with optional credentials.
///
/// The `url` is either a remote endpoint (`https://...`) or a local
/// directory (a bare path, or `file://` prefixed). Local repositories
/// receive the same logical layout as remote ones, written as files.
#[derive(Debug, Clone)]
pub struct MavenRepository {
    pub name: String,
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl MavenRepository {
    /// Build a `MavenRepository` from a name and a manifest `RepositoryEntry`.
    pub fn from_entry(name: &str, entry: &RepositoryEntry) -> Self {
        match entry {
            RepositoryEntry::Url(url) => Self {
                name: name.to_string(),
                url: url.trim_end_matches('/').to_string(),
                username: None,
                password: None,
            },
            RepositoryEntry::Detailed {
                url,
                username,
                password,
            } => Self {
                name: name.to_string(),
                url: url.trim_end_matches('/').to_string(),
                username: username.clone(),
                password: password.clone(),
            },
        }
    }

    /// Build a `MavenRepository` directly from a URL or local path.
    pub fn from_url(url: &str) -> Self {
        Self {
            name: url.trim_end_matches('/').to_string(),
            url: url.trim_end_matches('/').to_string(),
            username: None,
            password: None,
        }
    }

    /// Whether this repository is a local directory rather than a remote
    /// endpoint.
    pub fn is_local(&self) -> bool {
        self.url.starts_with("file://") || !self.url.contains("://")
    }

    /// Filesystem root of a local repository, `None` for remote ones.
    pub fn local_root(&self) -> Option<PathBuf> {
        if !self.is_local() {
            return None;
        }
        Some(PathBuf::from(
            self.url.strip_prefix("file://").unwrap_or(&self.url),
        ))
    }

    /// Translate a location produced by the layout methods below into a
    /// filesystem path, for local repositories.
    pub fn location_as_path(location: &str) -> &Path {
        Path::new(location.strip_prefix("file://").unwrap_or(location))
    }

    /// Base location holding every file of a `(group, artifact)` pair.
    ///
    /// `com.example:myapp` under `https://repo.example.com` becomes
    /// `https://repo.example.com/com/example/myapp`.
    pub fn artifact_base(&self, group: &str, artifact: &str) -> String {
        format!("{}/{}/{}", self.url, group.replace('.', "/"), artifact)
    }

    /// Location of a file at `path` relative to the artifact base.
    pub fn artifact_location(&self, group: &str, artifact: &str, path: &str) -> String {
        format!("{}/{}", self.artifact_base(group, artifact), path)
    }

    /// Location of the artifact-level `maven-metadata.xml` (version listing).
    pub fn metadata_location(&self, group: &str, artifact: &str) -> String {
        self.artifact_location(group, artifact, "maven-metadata.xml")
    }

    /// Location of the version-level `maven-metadata.xml` (snapshot build
    /// numbers). `version` is the literal version, `-SNAPSHOT` included.
    pub fn snapshot_metadata_location(
        &self,
        group: &str,
        artifact: &str,
        version: &str,
    ) -> String {
        self.artifact_location(group, artifact, &format!("{version}/maven-metadata.xml"))
    }

    /// Whether this repository has credentials configured.
    pub fn has_auth(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_base_replaces_dots() {
        let repo = MavenRepository::from_url("https://repo.example.com/releases");
        assert_eq!(
            repo.artifact_base("com.google.guava", "guava"),
            "https://repo.example.com/releases/com/google/guava/guava"
        );
    }

    #[test]
    fn artifact_location_appends_path() {
        let repo = MavenRepository::from_url("https://repo.example.com");
        assert_eq!(
            repo.artifact_location("com.example", "myapp", "1.2.3/myapp-1.2.3.jar"),
            "https://repo.example.com/com/example/myapp/1.2.3/myapp-1.2.3.jar"
        );
    }

    #[test]
    fn metadata_locations() {
        let repo = MavenRepository::from_url("https://repo.example.com");
        assert_eq!(
            repo.metadata_location("com.example", "myapp"),
            "https://repo.example.com/com/example/myapp/maven-metadata.xml"
        );
        assert_eq!(
            repo.snapshot_metadata_location("com.example", "myapp", "1.2.3-SNAPSHOT"),
            "https://repo.example.com/com/example/myapp/1.2.3-SNAPSHOT/maven-metadata.xml"
        );
    }

    #[test]
    fn remote_vs_local() {
        assert!(!MavenRepository::from_url("https://repo.example.com").is_local());
        assert!(MavenRepository::from_url("/tmp/repository").is_local());
        assert!(MavenRepository::from_url("build/repository").is_local());
        assert!(MavenRepository::from_url("file:///tmp/repository").is_local());
    }

    #[test]
    fn local_root_strips_file_scheme() {
        let repo = MavenRepository::from_url("file:///tmp/repository");
        assert_eq!(repo.local_root(), Some(PathBuf::from("/tmp/repository")));
        assert_eq!(
            MavenRepository::from_url("https://repo.example.com").local_root(),
            None
        );
    }

    #[test]
    fn location_as_path_for_local_layout() {
        let repo = MavenRepository::from_url("/tmp/repository");
        let location = repo.metadata_location("com.example", "myapp");
        assert_eq!(
            MavenRepository::location_as_path(&location),
            Path::new("/tmp/repository/com/example/myapp/maven-metadata.xml")
        );
    }

    #[test]
    fn from_entry_url() {
        let entry = RepositoryEntry::Url("https://repo.example.com/maven/".to_string());
        let repo = MavenRepository::from_entry("test", &entry);
        assert_eq!(repo.url, "https://repo.example.com/maven");
        assert!(!repo.has_auth());
    }

    #[test]
    fn from_entry_detailed_with_auth() {
        let entry = RepositoryEntry::Detailed {
            url: "https://nexus.co/maven".to_string(),
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
        };
        let repo = MavenRepository::from_entry("nexus", &entry);
        assert!(repo.has_auth());
        assert_eq!(repo.username.as_deref(), Some("user"));
    }
}
