use async_trait::async_trait;
use tracing::debug;

use crate::domain::{SegmentPayload, SegmentSink, SubmitError};

/// POSTs segments as JSON to a configured endpoint.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SegmentSink for WebhookSink {
    async fn send(&self, payload: &SegmentPayload) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(url = %self.url, status = status.as_u16(), "Segment endpoint responded");
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        Ok(())
    }
}
