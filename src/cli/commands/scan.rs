use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::{FileScanner, ProgressReporter};
use crate::scanner::{JsonLinesReporter, LogReporter};
use crate::types::statistics::StatisticsCollector;
use crate::types::{ScanConfig, ScanStats};
use clap::{ArgGroup, Args, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// How findings are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FindingFormat {
    /// One structured log event per finding
    Log,
    /// One JSON object per line on stdout
    Json,
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["file", "dir"])))]
pub struct ScanCommand {
    /// File to scan
    #[arg(long)]
    file: Option<PathBuf>,

    /// Directory to scan recursively
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Custom regex pattern to match (replaces the default base64 pattern)
    #[arg(long)]
    regex: Option<String>,

    /// Minimum number of characters in encoded string to check (overrides config)
    #[arg(long)]
    min_chars: Option<usize>,

    /// Read buffer size in bytes (overrides config)
    #[arg(long)]
    buffer_size: Option<usize>,

    /// Output format for findings
    #[arg(long, value_enum, default_value_t = FindingFormat::Log)]
    format: FindingFormat,
}

impl ScanCommand {
    pub fn run(&self, app_config: &AppConfig) -> AppResult<ScanStats> {
        info!("=== Ferret Finder - Scan ===");

        // CLI arguments override config values
        let mut builder = ScanConfig::builder()
            .min_chars(self.min_chars.unwrap_or(app_config.scan.min_chars))
            .read_buffer_bytes(self.buffer_size.unwrap_or(app_config.scan.read_buffer_bytes));
        if let Some(pattern) = self.regex.clone().or_else(|| app_config.scan.pattern.clone()) {
            builder = builder.pattern(pattern);
        }
        let config = builder.build().map_err(AppError::Config)?;

        let target = self
            .file
            .as_ref()
            .or(self.dir.as_ref())
            .ok_or_else(|| {
                AppError::InvalidInput("Either --file or --dir must be specified".to_string())
            })?;

        // Pattern compilation happens here, before any file is opened
        let mut scanner = FileScanner::new(config)?;
        info!("Target: {}", target.display());

        let stats = match self.format {
            FindingFormat::Log => scanner.scan_path(target, &mut LogReporter)?,
            FindingFormat::Json => {
                let stdout = std::io::stdout();
                let mut reporter = JsonLinesReporter::new(stdout.lock());
                scanner.scan_path(target, &mut reporter)?
            }
        };

        info!("=== Scan Complete ===");
        info!("  {}", stats.summary());
        info!(
            "  Rejected: {} (decode: {}, utf-8: {}, non-printable: {})",
            stats.rejected(),
            stats.decode_failures,
            stats.invalid_utf8,
            stats.non_printable
        );
        info!(
            "  Elapsed: {}",
            ProgressReporter::format_elapsed_time(stats.duration().as_secs_f64())
        );

        Ok(stats)
    }
}
