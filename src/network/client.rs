//! HTTP client wrapper - fetches manifests by content hash

use std::time::Instant;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::ContentError;
use crate::models::Manifest;

/// Anything that can resolve a manifest hash to a manifest
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch_manifest(&self, manifest_hash: &str) -> Result<Manifest, ContentError>;
}

/// Fetches manifests from `{content_url}/api/content/{hash}/`
#[derive(Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    config: Config,
}

impl ContentClient {
    pub fn new(config: Config) -> Self {
        ContentClient {
            client: create_client(&config),
            config,
        }
    }
}

#[async_trait]
impl ManifestSource for ContentClient {
    async fn fetch_manifest(&self, manifest_hash: &str) -> Result<Manifest, ContentError> {
        let url = self.config.content_endpoint(manifest_hash);
        let start = Instant::now();

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            time_ms = start.elapsed().as_millis() as u64,
            "Manifest response"
        );

        if !status.is_success() {
            return Err(ContentError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        serde_json::from_str::<Manifest>(&body).map_err(|e| ContentError::Decode(e.to_string()))
    }
}

/// Create an HTTP client following redirects with the configured timeout
pub fn create_client(config: &Config) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(config.request_timeout())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
