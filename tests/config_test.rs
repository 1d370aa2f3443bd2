use audience::cli::Cli;
use audience::config::Settings;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let settings = Settings::from_root(temp_dir.path().to_str().unwrap())?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.webhook.url, audience::domain::DEFAULT_ENDPOINT);
    assert_eq!(settings.notifications.position, "bottom-right");
    assert_eq!(settings.notifications.auto_close_ms, 3000);

    Ok(())
}

#[test]
fn test_load_from_toml() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let audience_toml = r#"
[server]
host = "0.0.0.0"
port = 8088

[webhook]
url = "http://localhost:9000/segments"

[notifications]
position = "top-right"
auto_close_ms = 5000
"#;
    fs::write(root.join("audience.toml"), audience_toml)?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.webhook.url, "http://localhost:9000/segments");
    assert_eq!(settings.notifications.position, "top-right");
    assert_eq!(settings.notifications.auto_close_ms, 5000);

    Ok(())
}

#[test]
fn test_cli_overrides_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("custom.toml");

    fs::write(
        &config_path,
        r#"
[server]
port = 4000

[webhook]
url = "http://localhost:9000/from-file"
"#,
    )?;

    let cli = Cli::parse_from([
        "audience",
        "--config",
        config_path.to_str().unwrap(),
        "--port",
        "5000",
        "--webhook-url",
        "https://hooks.example.com/segments",
    ]);
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.webhook.url, "https://hooks.example.com/segments");

    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(
        root.join("audience.toml"),
        r#"
[webhook]
url = "mailto:segments@example.com"

[notifications]
position = "middle"
"#,
    )?;

    let err = Settings::from_root(root.to_str().unwrap()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Configuration validation failed"));
    assert!(message.contains("webhook.url"));
    assert!(message.contains("notifications.position"));

    Ok(())
}
