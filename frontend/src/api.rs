use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use shared::{
    Clock, ComparisonRequest, ComparisonResponse, ComparisonTransport, ErrorBody, RequestError,
    COMPARE_PATH,
};

/// Talks to the gateway with `fetch`.
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(COMPARE_PATH)
    }
}

impl ComparisonTransport for HttpTransport {
    fn compare(
        &self,
        request: ComparisonRequest,
    ) -> LocalBoxFuture<'static, Result<ComparisonResponse, RequestError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move { send_comparison(&endpoint, &request).await })
    }
}

async fn send_comparison(
    endpoint: &str,
    request: &ComparisonRequest,
) -> Result<ComparisonResponse, RequestError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|e| RequestError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::error!("Network error: {:?}", e);
            RequestError::Transport(e.to_string())
        })?;

    if response.ok() {
        return response
            .json::<ComparisonResponse>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()));
    }

    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => Some(body.error),
        Err(e) => {
            log::warn!("Server error {} without an error body: {}", status, e);
            None
        }
    };
    Err(RequestError::Server { status, message })
}

/// Narrative timers backed by `setTimeout`.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}
