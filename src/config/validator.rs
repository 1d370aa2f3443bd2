use reqwest::Url;
use thiserror::Error;

use crate::config::{NotificationSettings, ServerSettings, Settings, WebhookSettings};
use crate::domain::notification::POSITIONS;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        errors.extend(Self::validate_server(&settings.server));
        errors.extend(Self::validate_webhook(&settings.webhook));
        errors.extend(Self::validate_notifications(&settings.notifications));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        errors
    }

    fn validate_webhook(webhook: &WebhookSettings) -> Vec<ValidationError> {
        if webhook.url.is_empty() {
            return vec![ValidationError::MissingField("webhook.url".to_string())];
        }

        match Url::parse(&webhook.url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => vec![],
            Ok(url) => vec![ValidationError::InvalidValue {
                field: "webhook.url".to_string(),
                reason: format!("Unsupported scheme '{}'", url.scheme()),
            }],
            Err(e) => vec![ValidationError::InvalidValue {
                field: "webhook.url".to_string(),
                reason: e.to_string(),
            }],
        }
    }

    fn validate_notifications(notifications: &NotificationSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !POSITIONS.contains(&notifications.position.as_str()) {
            errors.push(ValidationError::InvalidValue {
                field: "notifications.position".to_string(),
                reason: format!("Expected one of {}", POSITIONS.join(", ")),
            });
        }

        if notifications.auto_close_ms == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "notifications.auto_close_ms".to_string(),
                reason: "Auto-close delay must be greater than 0".to_string(),
            });
        }

        errors
    }
}
