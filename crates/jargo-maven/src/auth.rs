//! Repository authentication using credentials from `Jargo.toml`.
//!
//! Credentials are configured per-repository in `Jargo.toml`, typically via
//! `${env:SECRET}` interpolation from `.jargo.env`:
//!
//! ```toml
//! [repositories]
//! releases = { url = "https://nexus.co/maven", username = "${env:NEXUS_USER}", password = "${env:NEXUS_PASS}" }
//! ```
//!
//! By the time the manifest is loaded, `${env:...}` values are already
//! interpolated, so this module just reads the resolved credentials.

use reqwest::RequestBuilder;

use crate::repository::MavenRepository;

/// Apply HTTP Basic authentication to a request when the repository has a
/// complete credential pair. A username or password alone is ignored.
pub fn apply_auth(request: RequestBuilder, repo: &MavenRepository) -> RequestBuilder {
    match (&repo.username, &repo.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
        _ => request,
    }
}
