//! Metadata retrieval from Maven repositories.

use std::time::Duration;

use reqwest::Client;

use crate::auth;
use crate::repository::MavenRepository;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build a shared reqwest client for repository traffic.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("jargo/0.2")
        .build()
        .map_err(|e| {
            jargo_util::errors::JargoError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// Fetch a text document from a repository location.
///
/// Returns `Ok(None)` when the document does not exist: remote repositories
/// answer 404, local ones simply lack the file. Publication treats that as
/// "no prior versions". A failed request is an error with no retry.
pub async fn fetch_text(
    client: &Client,
    repo: &MavenRepository,
    location: &str,
) -> miette::Result<Option<String>> {
    if repo.is_local() {
        let path = MavenRepository::location_as_path(location);
        if !path.is_file() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(path).map_err(jargo_util::errors::JargoError::Io)?;
        return Ok(Some(content));
    }

    let mut req = client.get(location);
    req = auth::apply_auth(req, repo);

    let resp = req
        .send()
        .await
        .map_err(|e| jargo_util::errors::JargoError::Network {
            message: format!("Request to {location} failed: {e}"),
        })?;

    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(jargo_util::errors::JargoError::Network {
            message: format!("HTTP {status} fetching {location}"),
        }
        .into());
    }

    let text = resp
        .text()
        .await
        .map_err(|e| jargo_util::errors::JargoError::Network {
            message: format!("Failed to read response from {location}: {e}"),
        })?;
    Ok(Some(text))
}
