use clap::{Parser, Subcommand};
use std::path::PathBuf;
use submarine_parser::Protocol;

#[derive(Parser)]
#[command(name = "submarine")]
#[command(author, version, about = "Release-title parsing service")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP parsing service
    Start {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Parse a single release title
    Parse {
        /// Release title to parse
        #[arg(required = true)]
        title: String,

        /// Protocol the release was published on (torrent, usenet)
        #[arg(long, default_value = "torrent")]
        protocol: Protocol,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config or defaults if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Show version information
    Version,
}
