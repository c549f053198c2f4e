//! GitHub releases API interaction.
//!
//! Only the releases list is queried; its first entry is taken as the
//! latest release without any version comparison.

use crate::config::InstallerSettings;
use crate::error::InstallError;
use crate::types::Release;
use reqwest::Client;

const USER_AGENT: &str = concat!("solvm-installer/", env!("CARGO_PKG_VERSION"));

pub fn build_client() -> Result<Client, InstallError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Fetch the release list and return its first entry.
pub async fn get_latest_release(
    client: &Client,
    settings: &InstallerSettings,
) -> Result<Release, InstallError> {
    let url = settings.releases_url.as_str();
    tracing::debug!("Fetching release list from: {}", url);

    let mut request = client
        .get(url)
        .header("Accept", "application/vnd.github+json");

    if let Some(token) = &settings.github_token {
        request = request.bearer_auth(token);
        tracing::debug!("Using GITHUB_TOKEN");
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(InstallError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    let releases: Vec<Release> = serde_json::from_str(&body)?;
    tracing::debug!("Release list contains {} entries", releases.len());

    releases
        .into_iter()
        .next()
        .ok_or_else(|| InstallError::NoReleases {
            url: url.to_string(),
        })
}
