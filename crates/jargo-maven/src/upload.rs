//! Artifact uploads: HTTP PUT to remote repositories, or file writes into
//! local ones. Every payload is accompanied by its four checksum side-files.

use std::path::Path;

use reqwest::Client;

use jargo_util::errors::JargoError;
use jargo_util::progress::status;

use crate::auth;
use crate::checksum::Checksums;
use crate::repository::MavenRepository;

/// Upload one payload to `path` under the artifact base.
///
/// Remote repositories receive an HTTP PUT (basic auth when configured);
/// any status in `[200, 300)` is a success, anything else fails the whole
/// operation. Local repositories get the same logical path written as a
/// file, parent directories created as needed.
pub async fn put(
    client: &Client,
    repo: &MavenRepository,
    group: &str,
    artifact: &str,
    path: &str,
    body: Vec<u8>,
) -> miette::Result<()> {
    let location = repo.artifact_location(group, artifact, path);
    status("Uploading", &location);

    if repo.is_local() {
        return put_local(&location, &body);
    }

    let mut req = client.put(&location).body(body);
    req = auth::apply_auth(req, repo);

    let resp = req.send().await.map_err(|e| JargoError::Upload {
        url: location.clone(),
        message: e.to_string(),
    })?;

    let status_code = resp.status();
    if status_code.is_success() {
        tracing::debug!("uploaded {location}");
        Ok(())
    } else {
        Err(JargoError::UploadStatus {
            url: location,
            status: status_code.as_u16(),
        }
        .into())
    }
}

fn put_local(location: &str, body: &[u8]) -> miette::Result<()> {
    let path = MavenRepository::location_as_path(location);
    if let Some(parent) = path.parent() {
        jargo_util::fs::ensure_dir(parent).map_err(JargoError::Io)?;
    }
    std::fs::write(path, body).map_err(|e| JargoError::Upload {
        url: location.to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!("wrote {location}");
    Ok(())
}

/// Upload a generated document and its checksum side-files.
pub async fn put_text_with_checksums(
    client: &Client,
    repo: &MavenRepository,
    group: &str,
    artifact: &str,
    path: &str,
    content: &str,
) -> miette::Result<()> {
    let checksums = Checksums::of_bytes(content.as_bytes());
    put(client, repo, group, artifact, path, content.as_bytes().to_vec()).await?;
    put_checksums(client, repo, group, artifact, path, &checksums).await
}

/// Upload a file artifact and its checksum side-files.
///
/// The digests are computed by streaming the file before the upload body
/// is read, so a file that cannot be opened fails before any request.
pub async fn put_file_with_checksums(
    client: &Client,
    repo: &MavenRepository,
    group: &str,
    artifact: &str,
    path: &str,
    file: &Path,
) -> miette::Result<()> {
    let checksums = Checksums::of_file(file).map_err(|e| JargoError::Upload {
        url: file.display().to_string(),
        message: e.to_string(),
    })?;
    let body = std::fs::read(file).map_err(|e| JargoError::Upload {
        url: file.display().to_string(),
        message: e.to_string(),
    })?;
    put(client, repo, group, artifact, path, body).await?;
    put_checksums(client, repo, group, artifact, path, &checksums).await
}

async fn put_checksums(
    client: &Client,
    repo: &MavenRepository,
    group: &str,
    artifact: &str,
    path: &str,
    checksums: &Checksums,
) -> miette::Result<()> {
    for (extension, digest) in checksums.entries() {
        put(
            client,
            repo,
            group,
            artifact,
            &format!("{path}.{extension}"),
            digest.as_bytes().to_vec(),
        )
        .await?;
    }
    Ok(())
}
