//! Timing results and run aggregates

use serde::{Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

/// Report section a phase belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Import,
    Validation,
    Listing,
    StatusReport,
    Cache,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Import,
        Section::Validation,
        Section::Listing,
        Section::StatusReport,
        Section::Cache,
    ];

    /// Heading used by the text report
    pub fn heading(self) -> &'static str {
        match self {
            Section::Import => "IMPORT",
            Section::Validation => "VALIDATION",
            Section::Listing => "LISTING",
            Section::StatusReport => "STATUS & REPORT",
            Section::Cache => "CACHE",
        }
    }
}

/// One timed benchmark phase: label, wall-clock duration, success flag.
#[derive(Debug, Clone, Serialize)]
pub struct TimingResult {
    pub section: Section,
    pub label: String,
    #[serde(rename = "elapsed_secs", serialize_with = "duration_secs")]
    pub elapsed: Duration,
    pub success: bool,
    /// Record count behind this phase, when throughput is meaningful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<u64>,
}

impl TimingResult {
    /// Implied records per second; 0.0 without a count or measurable time
    pub fn throughput(&self) -> f64 {
        match self.items {
            Some(items) if self.elapsed > Duration::ZERO => {
                items as f64 / self.elapsed.as_secs_f64()
            }
            _ => 0.0,
        }
    }
}

/// Aggregates over a full run, handed to the reporter.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total_entities: u64,
    #[serde(rename = "generation_secs", serialize_with = "duration_secs")]
    pub generation: Duration,
    #[serde(rename = "total_secs", serialize_with = "duration_secs")]
    pub total_elapsed: Duration,
    pub operations: usize,
    pub failures: usize,
    pub workspace: PathBuf,
}

impl RunSummary {
    pub fn aggregate(
        results: &[TimingResult],
        total_entities: u64,
        generation: Duration,
        workspace: PathBuf,
    ) -> Self {
        Self {
            total_entities,
            generation,
            total_elapsed: results.iter().map(|r| r.elapsed).sum(),
            operations: results.len(),
            failures: results.iter().filter(|r| !r.success).count(),
            workspace,
        }
    }
}

fn duration_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
