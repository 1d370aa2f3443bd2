//! REST endpoints consumed by the web UI.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Settings;

#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<Settings>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Runtime settings the segment editor needs in the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfigDto {
    pub endpoint: String,
    pub toast_position: String,
    pub toast_auto_close_ms: u64,
}

impl From<&Settings> for UiConfigDto {
    fn from(settings: &Settings) -> Self {
        Self {
            endpoint: settings.webhook.url.clone(),
            toast_position: settings.notifications.position.clone(),
            toast_auto_close_ms: settings.notifications.auto_close_ms,
        }
    }
}

/// GET /api/ui-config
pub async fn get_ui_config(State(state): State<ApiState>) -> impl IntoResponse {
    let dto = UiConfigDto::from(state.settings.as_ref());
    (StatusCode::OK, Json(ApiResponse::success(dto)))
}
