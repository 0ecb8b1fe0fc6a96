use crate::config::{AppConfig, LoggingConfig};
use crate::errors::AppResult;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Ferret Finder - base64 scanner, echo server and file codec
#[derive(Parser)]
#[command(name = "ferret")]
#[command(about = "Find base64-encoded printable text in files")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./ferret.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log output format (overrides config)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan a file or directory for base64-encoded printable text
    Scan(commands::scan::ScanCommand),
    /// Run the HTTP echo server (POST / echoes, POST /b64 decodes)
    Serve(commands::serve::ServeCommand),
    /// Print the base64 encoding of a file
    Encode(commands::codec::EncodeCommand),
    /// Decode a base64 file and print the result
    Decode(commands::codec::DecodeCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_optional(cli.config.as_deref())?;
    if let Some(format) = cli.log_format {
        app_config.logging.format = format.as_str().to_string();
    }

    init_logging(&app_config.logging, cli.debug);

    match cli.command {
        Commands::Scan(command) => command.run(&app_config).map(|_| ()),
        Commands::Serve(command) => command.run(&app_config).await,
        Commands::Encode(command) => command.run(),
        Commands::Decode(command) => command.run(),
    }
}

/// Install the global tracing subscriber
///
/// Filter precedence: RUST_LOG, then `--debug`, then `logging.level`.
/// Events go to stderr so JSON findings on stdout stay machine-readable.
pub fn init_logging(settings: &LoggingConfig, debug: bool) {
    let fallback = if debug { "debug" } else { settings.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // try_init: a subscriber may already be installed (tests, embedding)
    let _ = if settings.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
