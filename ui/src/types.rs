//! Shared types for the segment builder UI
//!
//! These types mirror the backend API response structures.

use audience::domain::{notification, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Runtime settings served by the host at `/api/ui-config`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiConfig {
    /// Where segments are POSTed
    pub endpoint: String,
    #[serde(default = "default_position")]
    pub toast_position: String,
    #[serde(default = "default_auto_close")]
    pub toast_auto_close_ms: u64,
}

fn default_position() -> String {
    notification::DEFAULT_POSITION.to_string()
}

fn default_auto_close() -> u64 {
    notification::DEFAULT_AUTO_CLOSE_MS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            toast_position: default_position(),
            toast_auto_close_ms: default_auto_close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_config_from_envelope() {
        let body = r#"{
            "success": true,
            "data": {
                "endpoint": "http://localhost:9000/segments",
                "toast_position": "top-left",
                "toast_auto_close_ms": 1500
            }
        }"#;
        let response: ApiResponse<UiConfig> = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert!(response.error.is_none());

        let config = response.data.unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/segments");
        assert_eq!(config.toast_position, "top-left");
        assert_eq!(config.toast_auto_close_ms, 1500);
    }

    #[test]
    fn test_missing_toast_fields_use_defaults() {
        let config: UiConfig =
            serde_json::from_str(r#"{"endpoint": "https://hooks.example.com"}"#).unwrap();
        assert_eq!(config.toast_position, "bottom-right");
        assert_eq!(config.toast_auto_close_ms, 3000);
    }

    #[test]
    fn test_default_points_at_builtin_endpoint() {
        assert_eq!(UiConfig::default().endpoint, DEFAULT_ENDPOINT);
    }
}
