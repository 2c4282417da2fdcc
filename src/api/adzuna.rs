use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::ListingSource;
use crate::core::config::{AdzunaConfig, SORT_ORDER};
use crate::core::FetchError;

pub struct AdzunaClient {
    client: Client,
    config: AdzunaConfig,
}

impl AdzunaClient {
    pub fn new(config: AdzunaConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self { client, config })
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("app_id", self.config.app_id.clone()),
            ("app_key", self.config.app_key.clone()),
            ("results_per_page", self.config.results_per_page.to_string()),
            ("what", self.config.keyword.clone()),
            ("sort_by", SORT_ORDER.to_string()),
            ("content-type", "application/json".to_string()),
        ]
    }
}

#[async_trait]
impl ListingSource for AdzunaClient {
    async fn fetch(&self) -> Result<serde_json::Value, FetchError> {
        let endpoint = self.config.endpoint();

        tracing::info!(
            "📡 Requesting {} (what={}, results_per_page={}, sort_by={})",
            endpoint,
            self.config.keyword,
            self.config.results_per_page,
            SORT_ORDER
        );

        // without_url() keeps app_key out of error messages and logs
        let response = self
            .client
            .get(&endpoint)
            .query(&self.query())
            .send()
            .await
            .map_err(|e| FetchError::Connectivity {
                endpoint: endpoint.clone(),
                source: e.without_url(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = error_body(status, response.text().await);
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Connectivity {
            endpoint: endpoint.clone(),
            source: e.without_url(),
        })?;

        let document =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::info!("✅ API response received from {}", endpoint);
        Ok(document)
    }
}

/// Body of a failed response for diagnostics; a read failure is logged and
/// described in place of the body.
fn error_body(status: StatusCode, body: Result<String, reqwest::Error>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            let e = e.without_url();
            tracing::warn!("Could not read {} error body: {}", status, e);
            format!("<unreadable body: {}>", e)
        }
    }
}
