use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Audience segment builder - serves the segment editor and submits segments
#[derive(Parser, Debug, Clone)]
#[command(name = "audience", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "AUDIENCE_CONFIG", default_value = "audience.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "AUDIENCE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "AUDIENCE_PORT")]
    pub port: Option<u16>,

    /// Endpoint segments are POSTed to
    #[arg(long, env = "AUDIENCE_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the web UI (default)
    Serve,
    /// Submit a segment without the UI
    Submit {
        /// Segment name
        #[arg(short, long)]
        name: String,

        /// Schema field to include, in order (e.g. first_name, city)
        #[arg(short, long = "schema")]
        schema: Vec<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
