use audience::adapters::health_handler::HealthHandler;
use audience::adapters::logging_handler::LoggingNotifier;
use audience::adapters::webhook_sink::WebhookSink;
use audience::cli::{Cli, Command};
use audience::config::Settings;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    match cli.command() {
        Command::Serve => serve(settings).await,
        Command::Submit { name, schema } => submit(settings, name, schema).await,
    }
}

async fn serve(settings: Settings) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    info!("Starting audience segment builder on {}", addr);
    info!("Segments will be sent to {}", settings.webhook.url);

    let app = audience::create_app(Arc::new(settings), Arc::new(HealthHandler::new()));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn submit(settings: Settings, name: String, schema: Vec<String>) -> anyhow::Result<()> {
    let sink = WebhookSink::new(settings.webhook.url);
    info!("Submitting segment '{}' to {}", name, sink.url());
    audience::submit_segment(&sink, &LoggingNotifier::new(), &name, &schema).await
}
