//! Source resolution: share-link rewriting and the remote-then-local
//! fallback.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use pharmadash_shared::{AppError, AppResult};

/// Where to fetch raw CSV bytes from.
///
/// A snapshot value: handlers take one copy per request, so a concurrent
/// reconfiguration is never observed half-applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Remote share-link URL, tried first when present.
    pub remote_url: Option<String>,
    /// Local fallback CSV path.
    pub local_path: PathBuf,
    /// Remote fetch timeout.
    pub fetch_timeout: Duration,
}

/// Rewrites a share-link URL into a direct-download URL.
///
/// Three known share-link shapes carry an embedded file id:
/// `…/file/d/{id}/…`, `…open?id={id}` and `…?id={id}`. Anything else,
/// including non-share-link hosts, passes through unchanged as
/// already-direct.
#[must_use]
pub fn direct_download_url(share_url: &str) -> String {
    if !share_url.contains("drive.google.com") {
        return share_url.to_string();
    }

    let file_id = share_url
        .split_once("/file/d/")
        .map(|(_, rest)| rest.split('/').next().unwrap_or(rest))
        .or_else(|| {
            share_url
                .split_once("open?id=")
                .map(|(_, rest)| rest.split('&').next().unwrap_or(rest))
        })
        .or_else(|| {
            share_url
                .split_once("id=")
                .map(|(_, rest)| rest.split('&').next().unwrap_or(rest))
        });

    match file_id {
        Some(id) if !id.is_empty() => {
            format!("https://drive.google.com/uc?export=download&id={id}")
        }
        _ => share_url.to_string(),
    }
}

/// Produces raw CSV bytes for the descriptor.
///
/// Remote first when configured; any remote failure (network, timeout,
/// non-2xx) is logged and control falls through to the local file. The
/// fallback order is fixed and not overridable per request.
pub async fn resolve(client: &reqwest::Client, desc: &SourceDescriptor) -> AppResult<Vec<u8>> {
    if let Some(url) = &desc.remote_url {
        match fetch_remote(client, url, desc.fetch_timeout).await {
            Ok(bytes) => {
                info!(bytes = bytes.len(), "loaded source from remote URL");
                return Ok(bytes);
            }
            Err(e) => {
                warn!(error = %e, "remote fetch failed, falling back to local file");
            }
        }
    }

    match tokio::fs::read(&desc.local_path).await {
        Ok(bytes) => {
            info!(
                path = %desc.local_path.display(),
                bytes = bytes.len(),
                "loaded source from local file"
            );
            Ok(bytes)
        }
        Err(e) => Err(AppError::SourceUnavailable(format!(
            "remote URL {} and local file {} both unavailable: {e}",
            desc.remote_url.as_deref().unwrap_or("not configured"),
            desc.local_path.display()
        ))),
    }
}

async fn fetch_remote(
    client: &reqwest::Client,
    share_url: &str,
    timeout: Duration,
) -> Result<Vec<u8>, reqwest::Error> {
    let url = direct_download_url(share_url);
    let response = client
        .get(&url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
