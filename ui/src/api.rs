//! HTTP calls made by the UI

use audience::domain::{SegmentPayload, SubmitError};
use gloo_net::http::Request;

use crate::types::*;

const API_BASE: &str = "/api";

/// Fetch runtime settings from the host
pub async fn get_ui_config() -> Result<UiConfig, String> {
    let url = format!("{}/ui-config", API_BASE);
    fetch_json::<UiConfig>(&url).await
}

/// POST a segment to the configured endpoint. Any 2xx status counts as
/// delivered.
pub async fn send_segment(endpoint: &str, payload: &SegmentPayload) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .json(payload)
        .map_err(|e| SubmitError::Transport(format!("Failed to serialize body: {}", e)))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
