//! Operation: publish artifacts to a Maven repository.
//!
//! Queries the artifact-level metadata for prior versions, derives the
//! actual publication version (timestamped build number for snapshots),
//! then uploads the artifacts, the generated POM, and the refreshed
//! metadata documents. Every payload is accompanied by its MD5, SHA-1,
//! SHA-256, and SHA-512 checksum files.

use std::path::Path;

use chrono::{DateTime, Utc};

use jargo_core::dependency::{DependencyScope, DependencyScopes};
use jargo_core::manifest::Manifest;
use jargo_core::publish::{PublishArtifact, PublishInfo};
use jargo_core::version::VersionNumber;
use jargo_maven::download::{build_client, fetch_text};
use jargo_maven::metadata::{self, SnapshotVersionEntry};
use jargo_maven::pom;
use jargo_maven::repository::MavenRepository;
use jargo_maven::upload;
use jargo_util::errors::JargoError;
use jargo_util::progress::{spinner, status, status_info, status_warn};

/// A configured publication, built up with chained setters and run with
/// [`execute`](Self::execute).
///
/// There are no retries: the first upload failure aborts the operation,
/// which may leave a partially published version behind in the repository.
pub struct PublishOperation {
    repository: Option<MavenRepository>,
    info: PublishInfo,
    artifacts: Vec<PublishArtifact>,
    dependencies: DependencyScopes,
    moment: Option<DateTime<Utc>>,
}

impl PublishOperation {
    pub fn new(info: PublishInfo) -> Self {
        Self {
            repository: None,
            info,
            artifacts: Vec::new(),
            dependencies: DependencyScopes::new(),
            moment: None,
        }
    }

    /// Configure a publication from the manifest of the project in
    /// `project_dir`.
    ///
    /// The group comes from `package.group`, the artifact id is the
    /// lower-cased package name, and POM extras fall back from the
    /// `[publish]` section to the `[package]` fields. When `[publish]`
    /// lists no artifacts, the default distribution jar under
    /// `build/dist/` is published. Relative artifact paths are resolved
    /// against `project_dir`.
    pub fn from_manifest(manifest: &Manifest, project_dir: &Path) -> miette::Result<Self> {
        let package = &manifest.package;
        let config = manifest.publish.clone().unwrap_or_default();

        let group_id = package.group.clone().ok_or_else(|| {
            JargoError::InvalidOption {
                message: "A package group is required for publication, set `group` under \
                          [package] in Jargo.toml"
                    .to_string(),
            }
        })?;
        let artifact_id = package.name.to_lowercase();
        let version =
            VersionNumber::parse(&package.version).ok_or_else(|| JargoError::Manifest {
                message: format!("Invalid package version '{}'", package.version),
            })?;

        let mut info = PublishInfo::new(group_id, artifact_id, version.clone());
        info.name = config.name.clone().or_else(|| Some(package.name.clone()));
        info.description = config.description.clone().or_else(|| package.description.clone());
        info.url = config.url.clone().or_else(|| package.url.clone());
        info.licenses = config.licenses.clone();
        info.developers = config.developers.clone();
        info.scm = config.scm.clone();

        let mut artifacts = Vec::new();
        for spec in &config.artifacts {
            let artifact = PublishArtifact::parse(spec).ok_or_else(|| {
                JargoError::InvalidOption {
                    message: format!("Invalid artifact spec '{spec}'"),
                }
            })?;
            artifacts.push(resolve_artifact_path(artifact, project_dir));
        }
        if artifacts.is_empty() {
            let jar = project_dir
                .join("build")
                .join("dist")
                .join(format!("{}-{}.jar", info.artifact_id, version));
            artifacts.push(PublishArtifact::new(jar));
        }

        let mut dependencies = DependencyScopes::new();
        collect_dependencies(&mut dependencies, &manifest.dependencies, None)?;
        collect_dependencies(
            &mut dependencies,
            &manifest.dev_dependencies,
            Some(DependencyScope::Test),
        )?;

        let repository = match config.repository {
            Some(ref spec) => Some(resolve_repository(manifest, spec)),
            None => None,
        };

        Ok(Self {
            repository,
            info,
            artifacts,
            dependencies,
            moment: None,
        })
    }

    /// Set the repository to publish to.
    pub fn repository(mut self, repository: MavenRepository) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Add one artifact to the publication.
    pub fn artifact(mut self, artifact: PublishArtifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Add several artifacts to the publication.
    pub fn artifacts(mut self, artifacts: impl IntoIterator<Item = PublishArtifact>) -> Self {
        self.artifacts.extend(artifacts);
        self
    }

    /// Replace the artifact list, discarding whatever was configured so far.
    pub fn replace_artifacts(mut self, artifacts: Vec<PublishArtifact>) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// Merge dependency declarations into the generated POM.
    pub fn dependencies(mut self, dependencies: &DependencyScopes) -> Self {
        self.dependencies.include(dependencies);
        self
    }

    /// Pin the moment of publication.
    ///
    /// When not provided, the current date and time are used.
    pub fn moment(mut self, moment: DateTime<Utc>) -> Self {
        self.moment = Some(moment);
        self
    }

    /// Run the publication.
    pub async fn execute(&self) -> miette::Result<()> {
        let repository = self.repository.as_ref().ok_or_else(|| {
            JargoError::InvalidOption {
                message: "A repository must be provided for publication".to_string(),
            }
        })?;
        if repository.is_local() && repository.has_auth() {
            status_warn(
                "Ignoring",
                &format!("credentials for local repository {}", repository.url),
            );
        }

        let moment = self.moment.unwrap_or_else(Utc::now);
        let info = &self.info;
        let group = &info.group_id;
        let artifact_id = &info.artifact_id;
        let version = &info.version;

        status(
            "Publishing",
            &format!("{group}:{artifact_id}:{version} to {}", repository.name),
        );

        let client = build_client()?;

        // Prior versions from the artifact-level metadata; a missing
        // document means this is the first publication.
        let sp = spinner("Checking existing versions...");
        let metadata_location = repository.metadata_location(group, artifact_id);
        let existing = fetch_text(&client, repository, &metadata_location).await;
        sp.finish_and_clear();
        let prior_versions = match existing? {
            Some(xml) => metadata::parse_metadata(&xml)?.versions,
            None => Vec::new(),
        };
        tracing::debug!(
            "found {} existing version(s) at {metadata_location}",
            prior_versions.len()
        );

        let actual_version = if version.is_snapshot() {
            let timestamp = metadata::format_snapshot_timestamp(moment);

            // The build number continues from the version-level metadata,
            // or starts at 1 when none was published yet.
            let snapshot_location =
                repository.snapshot_metadata_location(group, artifact_id, &version.to_string());
            let build_number = match fetch_text(&client, repository, &snapshot_location).await? {
                Some(xml) => {
                    metadata::parse_snapshot_metadata(&xml)?
                        .build_number
                        .unwrap_or(0)
                        + 1
                }
                None => 1,
            };

            let actual = version.with_qualifier(format!("{timestamp}-{build_number}"));
            status_info("Version", &actual.to_string());

            let entries: Vec<SnapshotVersionEntry> = self
                .artifacts
                .iter()
                .map(|artifact| SnapshotVersionEntry {
                    classifier: artifact.classifier.clone(),
                    extension: artifact.extension().to_string(),
                })
                .collect();
            let snapshot_doc = metadata::build_snapshot_metadata(
                group,
                artifact_id,
                version,
                &actual,
                &timestamp,
                build_number,
                &entries,
                moment,
            );
            upload::put_text_with_checksums(
                &client,
                repository,
                group,
                artifact_id,
                &format!("{version}/maven-metadata.xml"),
                &snapshot_doc,
            )
            .await?;

            actual
        } else {
            version.clone()
        };

        // Artifact files live under the literal version directory, while
        // their names carry the actual (possibly timestamped) version.
        for artifact in &self.artifacts {
            let path = format!(
                "{version}/{}",
                artifact.file_name(artifact_id, &actual_version)
            );
            upload::put_file_with_checksums(
                &client,
                repository,
                group,
                artifact_id,
                &path,
                &artifact.file,
            )
            .await?;
        }

        let pom_doc = pom::build_pom(info, &self.dependencies);
        upload::put_text_with_checksums(
            &client,
            repository,
            group,
            artifact_id,
            &format!("{version}/{artifact_id}-{actual_version}.pom"),
            &pom_doc,
        )
        .await?;

        let metadata_doc =
            metadata::build_metadata(group, artifact_id, version, &prior_versions, moment);
        upload::put_text_with_checksums(
            &client,
            repository,
            group,
            artifact_id,
            "maven-metadata.xml",
            &metadata_doc,
        )
        .await?;

        status(
            "Published",
            &format!("{group}:{artifact_id}:{actual_version}"),
        );
        Ok(())
    }
}

/// Resolve a repository spec: the name of a `[repositories]` entry in the
/// manifest, or a bare URL or path used as-is.
pub fn resolve_repository(manifest: &Manifest, spec: &str) -> MavenRepository {
    match manifest.repositories.get(spec) {
        Some(entry) => MavenRepository::from_entry(spec, entry),
        None => MavenRepository::from_url(spec),
    }
}

fn resolve_artifact_path(mut artifact: PublishArtifact, project_dir: &Path) -> PublishArtifact {
    if artifact.file.is_relative() {
        artifact.file = project_dir.join(&artifact.file);
    }
    artifact
}

fn collect_dependencies(
    scopes: &mut DependencyScopes,
    declarations: &std::collections::BTreeMap<String, jargo_core::dependency::Dependency>,
    forced_scope: Option<DependencyScope>,
) -> miette::Result<()> {
    for (name, declaration) in declarations {
        let detailed = declaration.to_detailed().ok_or_else(|| {
            JargoError::Manifest {
                message: format!(
                    "Invalid dependency '{name}': expected `group:artifact:version`"
                ),
            }
        })?;
        let scope = forced_scope
            .or(detailed.scope)
            .unwrap_or_default();
        scopes.add(scope, detailed);
    }
    Ok(())
}
