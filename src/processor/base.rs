use std::time::Instant;
use tracing::debug;

/// Progress tracking for long-running operations
pub struct StandardProgressTracker {
    start_time: Option<Instant>,
    last_report: Option<Instant>,
    report_interval_ms: u64,
}

impl Default for StandardProgressTracker {
    fn default() -> Self {
        Self {
            start_time: None,
            last_report: None,
            report_interval_ms: 500, // Report every 500ms
        }
    }
}

impl StandardProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        let now = Instant::now();
        self.start_time = Some(now);
        self.last_report = Some(now);
    }

    pub fn should_report(&mut self) -> bool {
        let now = Instant::now();
        match self.last_report {
            Some(last) => {
                if now.duration_since(last).as_millis() > self.report_interval_ms as u128 {
                    self.last_report = Some(now);
                    true
                } else {
                    false
                }
            }
            None => {
                self.last_report = Some(now);
                true
            }
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        match self.start_time {
            Some(start) => start.elapsed().as_secs_f64(),
            None => 0.0,
        }
    }
}

/// Trait for run-specific metrics formatting
pub trait StageMetrics {
    /// Format metrics for progress display, e.g. "Files: 10 | Findings: 2"
    fn format_custom_metrics(&self) -> String;
}

/// Progress reporting utilities
pub struct ProgressReporter;

impl ProgressReporter {
    /// Format elapsed seconds into human-readable time (days, hours, minutes, seconds)
    pub fn format_elapsed_time(elapsed_secs: f64) -> String {
        if elapsed_secs < 60.0 {
            format!("{:.1}s", elapsed_secs)
        } else if elapsed_secs < 3600.0 {
            let minutes = (elapsed_secs / 60.0).floor();
            let seconds = elapsed_secs % 60.0;
            format!("{}m {:.0}s ({:.1}s)", minutes, seconds, elapsed_secs)
        } else if elapsed_secs < 86400.0 {
            let hours = (elapsed_secs / 3600.0).floor();
            let remaining = elapsed_secs % 3600.0;
            let minutes = (remaining / 60.0).floor();
            let seconds = remaining % 60.0;
            format!(
                "{}h {}m {:.0}s ({:.1}s)",
                hours, minutes, seconds, elapsed_secs
            )
        } else {
            let days = (elapsed_secs / 86400.0).floor();
            let remaining = elapsed_secs % 86400.0;
            let hours = (remaining / 3600.0).floor();
            let remaining = remaining % 3600.0;
            let minutes = (remaining / 60.0).floor();
            let seconds = remaining % 60.0;
            format!(
                "{}d {}h {}m {:.0}s ({:.1}s)",
                days, hours, minutes, seconds, elapsed_secs
            )
        }
    }

    pub fn format_standard_progress(
        processed_count: usize,
        rate: f64,
        elapsed: f64,
        custom_metrics: &str,
    ) -> String {
        format!(
            "Processed: {} | Rate: {:.1}/sec | Elapsed: {} | {}",
            processed_count,
            rate,
            Self::format_elapsed_time(elapsed),
            custom_metrics
        )
    }

    /// Progress line at DEBUG, so it never mixes with findings on stdout
    pub fn report_progress<S: StageMetrics>(stats: &S, processed_count: usize, elapsed: f64) {
        let rate = if elapsed > 0.0 {
            processed_count as f64 / elapsed
        } else {
            0.0
        };
        debug!(
            "{}",
            Self::format_standard_progress(
                processed_count,
                rate,
                elapsed,
                &stats.format_custom_metrics()
            )
        );
    }
}
