use std::time::Duration;

use log::warn;
use reqwest::Client;
use shared::{ComparisonRequest, ComparisonResponse, ErrorBody};
use url::Url;

use crate::error::GatewayError;

/// Client for the external comparison engine that scrapes, hashes and
/// matches the photos.
#[derive(Clone)]
pub struct ComparisonEngine {
    client: Client,
    url: Url,
}

impl ComparisonEngine {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn compare(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResponse, GatewayError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("Comparison engine returned {}", status));
            return Err(GatewayError::Engine {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ComparisonResponse = serde_json::from_slice(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        if !parsed.counts_agree() {
            warn!(
                "Engine reported match_count {} with {} records",
                parsed.match_count,
                parsed.matches.len()
            );
        }

        Ok(parsed)
    }
}
