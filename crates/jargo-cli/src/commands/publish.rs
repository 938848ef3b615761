//! Publish command implementation.

use miette::Result;

use jargo_core::manifest::Manifest;
use jargo_core::publish::PublishArtifact;
use jargo_ops::ops_publish::{resolve_repository, PublishOperation};
use jargo_util::errors::JargoError;

pub async fn exec(repository: Option<&str>, artifacts: &[String]) -> Result<()> {
    let cwd = std::env::current_dir().map_err(JargoError::Io)?;
    let project_root = jargo_util::fs::find_project_root(&cwd).ok_or_else(|| {
        JargoError::Manifest {
            message: "Could not find Jargo.toml in current or parent directories".to_string(),
        }
    })?;
    let manifest = Manifest::from_path(&project_root.join(jargo_util::MANIFEST_FILE))?;

    let mut operation = PublishOperation::from_manifest(&manifest, &project_root)?;
    if let Some(spec) = repository {
        operation = operation.repository(resolve_repository(&manifest, spec));
    }
    if !artifacts.is_empty() {
        let mut parsed = Vec::with_capacity(artifacts.len());
        for spec in artifacts {
            parsed.push(PublishArtifact::parse(spec).ok_or_else(|| {
                JargoError::InvalidOption {
                    message: format!("Invalid artifact spec '{spec}'"),
                }
            })?);
        }
        operation = operation.replace_artifacts(parsed);
    }

    operation.execute().await
}
