//! Ferret Finder - Type System
//!
//! - `scan`: scan configuration and the per-line pipeline values
//!   (Candidate, DecodedResult, Verdict, Finding)
//! - `statistics`: per-run scan counters and timing

mod scan;
pub mod statistics;

pub use scan::*;
pub use statistics::{ScanStats, StatisticsCollector, TimingInfo};
