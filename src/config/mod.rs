use config::{Config, File};
use serde::{Deserialize, Serialize};

pub mod validator;

use crate::cli::Cli;
use crate::domain::{notification, DEFAULT_ENDPOINT};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub webhook: WebhookSettings,
    pub notifications: NotificationSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Where finished segments are POSTed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookSettings {
    pub url: String,
}

/// Toast placement and lifetime used by the web UI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationSettings {
    pub position: String,
    pub auto_close_ms: u64,
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Self::builder()?
            .add_source(File::from(cli.config.clone()).required(false))
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);
        settings.validate()?;

        Ok(settings)
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("audience");
        let s = Self::builder()?
            .add_source(File::from(config_path).required(false))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, anyhow::Error> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("webhook.url", DEFAULT_ENDPOINT)?
            .set_default("notifications.position", notification::DEFAULT_POSITION)?
            .set_default("notifications.auto_close_ms", notification::DEFAULT_AUTO_CLOSE_MS as i64)?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(url) = &cli.webhook_url {
            self.webhook.url = url.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            webhook: WebhookSettings {
                url: DEFAULT_ENDPOINT.to_string(),
            },
            notifications: NotificationSettings {
                position: notification::DEFAULT_POSITION.to_string(),
                auto_close_ms: notification::DEFAULT_AUTO_CLOSE_MS,
            },
        }
    }
}
