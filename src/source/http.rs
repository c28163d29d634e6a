//! HTTP backend client
//!
//! Talks to the backend's REST read endpoints with reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use super::HostelSource;
use crate::error::{HubError, Result};
use crate::models::Hostel;

/// [`HostelSource`] backed by `GET {base}/hostels` and `GET {base}/hostels/{id}`.
#[derive(Debug, Clone)]
pub struct HttpHostelSource {
    client: Client,
    base: Url,
}

impl HttpHostelSource {
    /// Builds a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| HubError::InvalidRequest(format!("invalid backend URL: {}", e)))?;
        // Url::join drops the last segment unless the path ends with '/'
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let client = Client::builder()
            .user_agent(concat!("hostel-hub/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| HubError::InvalidRequest(format!("invalid path {}: {}", path, e)))
    }

    async fn fetch<T: for<'de> Deserialize<'de>>(&self, url: Url) -> Result<T> {
        debug!(%url, "backend fetch");
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(HubError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(%url, %status, "backend returned an error");
            return Err(HubError::Fetch(format!("status {} body {}", status, body)));
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| HubError::Fetch(format!("failed to parse body: {}", e)))
    }
}

#[async_trait]
impl HostelSource for HttpHostelSource {
    async fn list_approved(&self) -> Result<Vec<Hostel>> {
        let mut url = self.url("hostels")?;
        url.query_pairs_mut().append_pair("status", "approved");
        self.fetch(url).await
    }

    async fn get(&self, hostel_id: &str) -> Result<Hostel> {
        let mut url = self.url("hostels")?;
        url.path_segments_mut()
            .map_err(|_| HubError::Internal("backend URL cannot be a base".to_string()))?
            .push(hostel_id);

        self.fetch(url).await.map_err(|err| match err {
            HubError::NotFound(_) => HubError::NotFound(hostel_id.to_string()),
            other => other,
        })
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Hostel>> {
        let mut url = self.url("hostels")?;
        url.query_pairs_mut().append_pair("ownerId", owner_id);
        self.fetch(url).await
    }
}
