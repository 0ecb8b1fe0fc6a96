//! Scan statistics
//!
//! Counters collected while a scan runs, plus the common timing and
//! collector trait shared by anything that reports a run summary.

use super::Verdict;
use std::time::{Duration, Instant};

/// Common trait for statistics collectors
pub trait StatisticsCollector {
    /// Get the total processing duration
    fn duration(&self) -> Duration;

    /// Calculate the processing rate (items per second)
    fn processing_rate(&self) -> f64;

    /// Finalize statistics collection
    fn finish(&mut self);

    /// Get a summary of the statistics
    fn summary(&self) -> String;
}

/// Common timing information for all statistics
#[derive(Debug, Clone)]
pub struct TimingInfo {
    pub start_time: Instant,
    pub processing_duration: Duration,
}

impl Default for TimingInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingInfo {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            processing_duration: Duration::default(),
        }
    }

    pub fn finish(&mut self) {
        self.processing_duration = self.start_time.elapsed();
    }

    pub fn elapsed(&self) -> Duration {
        if self.processing_duration.is_zero() {
            self.start_time.elapsed()
        } else {
            self.processing_duration
        }
    }
}

/// Scan run statistics
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    /// Files that could not be opened or read to the end
    pub files_skipped: usize,
    pub lines_scanned: usize,
    pub candidates: usize,
    pub findings: usize,
    pub decode_failures: usize,
    pub invalid_utf8: usize,
    pub non_printable: usize,
    pub timing: TimingInfo,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one evaluated candidate under its verdict
    pub fn record(&mut self, verdict: &Verdict) {
        self.candidates += 1;
        match verdict {
            Verdict::Printable => self.findings += 1,
            Verdict::DecodeFailed(_) => self.decode_failures += 1,
            Verdict::InvalidUtf8(_) => self.invalid_utf8 += 1,
            Verdict::NonPrintable { .. } => self.non_printable += 1,
        }
    }

    pub fn rejected(&self) -> usize {
        self.decode_failures + self.invalid_utf8 + self.non_printable
    }

    /// Percentage of candidates that survived validation
    pub fn acceptance_rate(&self) -> f64 {
        if self.candidates > 0 {
            (self.findings as f64 / self.candidates as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl crate::processor::StageMetrics for ScanStats {
    fn format_custom_metrics(&self) -> String {
        format!(
            "Files: {} | Candidates: {} | Findings: {}",
            self.files_scanned, self.candidates, self.findings
        )
    }
}

impl StatisticsCollector for ScanStats {
    fn duration(&self) -> Duration {
        self.timing.elapsed()
    }

    /// Lines per second
    fn processing_rate(&self) -> f64 {
        let elapsed = self.timing.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.lines_scanned as f64 / elapsed
        } else {
            0.0
        }
    }

    fn finish(&mut self) {
        self.timing.finish();
    }

    fn summary(&self) -> String {
        format!(
            "Scan: {} files ({} skipped), {} lines, {} candidates, {} findings ({:.1}%), {} rejected, {:.1} lines/sec",
            self.files_scanned,
            self.files_skipped,
            self.lines_scanned,
            self.candidates,
            self.findings,
            self.acceptance_rate(),
            self.rejected(),
            self.processing_rate()
        )
    }
}
