use super::{ProgressReporter, StandardProgressTracker};
use crate::errors::{AppError, AppResult};
use crate::scanner::{CandidatePipeline, FindingReporter};
use crate::types::statistics::StatisticsCollector;
use crate::types::{ScanConfig, ScanStats};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// How a single file's scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Every line was read
    Completed,
    /// A read error stopped the scan part way; earlier findings stand
    Aborted,
}

/// Scans files and directory trees line by line through the candidate pipeline
pub struct FileScanner {
    config: ScanConfig,
    pipeline: CandidatePipeline,
    progress_tracker: StandardProgressTracker,
}

impl FileScanner {
    /// Create a new scanner
    ///
    /// Fails before any file is touched if the configuration is invalid or
    /// the pattern does not compile.
    pub fn new(config: ScanConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::Config)?;
        let pipeline = CandidatePipeline::from_config(&config)?;

        info!("File scanner initialised");
        if pipeline.matcher().is_custom() {
            info!("Pattern (custom): {}", pipeline.matcher().as_str());
        } else {
            info!("Minimum characters: {}", config.min_chars);
        }
        debug!("Pattern: {}", pipeline.matcher().as_str());

        Ok(Self {
            config,
            pipeline,
            progress_tracker: StandardProgressTracker::new(),
        })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &CandidatePipeline {
        &self.pipeline
    }

    /// Scan a file, or every file under a directory
    ///
    /// A path that cannot be accessed is logged and counted as skipped, not
    /// treated as an error. Only reporter failures abort the run.
    pub fn scan_path(
        &mut self,
        path: &Path,
        reporter: &mut dyn FindingReporter,
    ) -> AppResult<ScanStats> {
        let mut stats = ScanStats::new();
        self.progress_tracker.start();

        match std::fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => {
                self.scan_directory(path, reporter, &mut stats)?;
            }
            Ok(_) => {
                self.scan_file(path, reporter, &mut stats)?;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to access path");
                stats.files_skipped += 1;
            }
        }

        stats.finish();
        Ok(stats)
    }

    /// Recursively scan every file below `dir`, in file-name order
    ///
    /// Entries the walk cannot read are logged and counted as skipped.
    pub fn scan_directory(
        &mut self,
        dir: &Path,
        reporter: &mut dyn FindingReporter,
        stats: &mut ScanStats,
    ) -> AppResult<()> {
        let walker = WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!(path = %path, error = %e, "Error accessing file");
                    stats.files_skipped += 1;
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            // Symlinked files are scanned; symlinked directories and special
            // files are not
            if !entry.path().is_file() {
                debug!("Skipping non-regular file: {}", entry.path().display());
                continue;
            }

            self.scan_file(entry.path(), reporter, stats)?;

            if self.progress_tracker.should_report() {
                ProgressReporter::report_progress(
                    &*stats,
                    stats.lines_scanned,
                    self.progress_tracker.elapsed_seconds(),
                );
            }
        }

        Ok(())
    }

    /// Scan a single file, skipping it with a warning if it cannot be opened
    pub fn scan_file(
        &self,
        path: &Path,
        reporter: &mut dyn FindingReporter,
        stats: &mut ScanStats,
    ) -> AppResult<FileOutcome> {
        debug!(file = %path.display(), "Scanning file");

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Failed to open file");
                stats.files_skipped += 1;
                return Ok(FileOutcome::Aborted);
            }
        };

        let reader = BufReader::with_capacity(self.config.read_buffer_bytes, file);
        self.scan_reader(reader, path, reporter, stats)
    }

    /// Scan any buffered reader, attributing findings to `source`
    ///
    /// Lines are split on `\n` with a trailing `\r` removed; a final line
    /// without a terminator is still scanned. Bytes that are not valid
    /// UTF-8 are replaced before matching, so they can never be part of a
    /// candidate.
    ///
    /// The source counts as scanned when read to the end, or as skipped
    /// when a read error stops it part way.
    pub fn scan_reader<R: BufRead>(
        &self,
        mut reader: R,
        source: &Path,
        reporter: &mut dyn FindingReporter,
        stats: &mut ScanStats,
    ) -> AppResult<FileOutcome> {
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(file = %source.display(), line = line_number + 1, error = %e, "Error reading file");
                    stats.files_skipped += 1;
                    return Ok(FileOutcome::Aborted);
                }
            }

            line_number += 1;
            stats.lines_scanned += 1;

            let line = String::from_utf8_lossy(trim_line_terminator(&buf));
            self.pipeline
                .process_line(&line, source, line_number, stats, reporter)?;
        }

        stats.files_scanned += 1;
        Ok(FileOutcome::Completed)
    }
}

fn trim_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
