use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{CatalogError, Result};

/// Polite wrapper over `reqwest::Client`: a configured user agent and a
/// minimum interval between requests.
///
/// Each call is a single attempt. Failures — network errors and non-2xx
/// responses alike — surface to the caller as-is; nothing is retried and
/// no client-side timeout is imposed.
pub struct HttpClient {
    client: reqwest::Client,
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl HttpClient {
    pub fn new(min_interval: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .expect("failed to build reqwest client");
        Self {
            client,
            min_interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    async fn wait_for_rate_limit(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(t) = *last {
            let elapsed = t.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    pub async fn get(&self, url: &str) -> Result<String> {
        self.wait_for_rate_limit().await;
        tracing::debug!(%url, "catalog request");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Api {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        resp.text().await.map_err(CatalogError::Http)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let text = self.get(url).await?;
        serde_json::from_str(&text).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
