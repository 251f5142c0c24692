//! Benchmark report rendering

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::Path;

use crate::core::{RunSummary, Section, TimingResult, VolumeConfig};

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable sectioned report
    #[default]
    Text,
    /// Single JSON document (for regression tooling)
    Json,
}

/// Everything the reporter needs: the configuration echo, the ordered
/// result sequence, and the aggregates the orchestrator already
/// computed. Rendering is pure presentation.
#[derive(Serialize)]
pub struct RunReport<'a> {
    pub tool: &'a Path,
    pub started: DateTime<Utc>,
    pub volumes: &'a VolumeConfig,
    pub results: &'a [TimingResult],
    pub summary: &'a RunSummary,
    /// False when `--cleanup` removes the workspace after the run
    pub workspace_kept: bool,
}

impl RunReport<'_> {
    pub fn print(&self, format: ReportFormat) -> Result<()> {
        match format {
            ReportFormat::Text => {
                self.print_text();
                Ok(())
            }
            ReportFormat::Json => {
                let doc = serde_json::to_string_pretty(self).into_diagnostic()?;
                println!("{doc}");
                Ok(())
            }
        }
    }

    fn print_text(&self) {
        let rule = style("=".repeat(70)).dim();
        println!();
        println!("{rule}");
        println!("{}", style("BENCHMARK REPORT").bold());
        println!("{rule}");

        println!();
        println!("{}", style("Configuration:").bold());
        println!("  Requirements: {}", self.volumes.requirements);
        println!("  Components:   {}", self.volumes.components);
        println!("  Suppliers:    {}", self.volumes.suppliers);
        println!("  Risks:        {}", self.volumes.risks);
        println!("  Tests:        {}", self.volumes.tests);
        println!("  Total:        {}", self.volumes.total());
        println!("  Target tool:  {}", self.tool.display());
        println!(
            "  Started:      {}",
            self.started.format("%Y-%m-%d %H:%M:%S UTC")
        );

        for section in Section::ALL {
            let rows: Vec<_> = self
                .results
                .iter()
                .filter(|r| r.section == section)
                .collect();
            if rows.is_empty() {
                continue;
            }
            println!();
            println!("{}", style("-".repeat(70)).dim());
            println!("{}", style(section.heading()).bold());
            println!("{}", style("-".repeat(70)).dim());
            for row in rows {
                println!("{}", render_line(row));
            }
        }

        println!();
        println!("{rule}");
        println!("{}", style("SUMMARY").bold());
        println!("{rule}");
        println!();
        println!(
            "  Fixture generation: {:.3}s",
            self.summary.generation.as_secs_f64()
        );
        println!("  Total entities:     {}", self.summary.total_entities);
        println!(
            "  Total benchmark:    {:.3}s",
            self.summary.total_elapsed.as_secs_f64()
        );
        println!("  Operations run:     {}", self.summary.operations);
        let failures = if self.summary.failures > 0 {
            style(self.summary.failures).red().to_string()
        } else {
            self.summary.failures.to_string()
        };
        println!("  Operations failed:  {failures}");

        println!();
        if self.workspace_kept {
            println!("  Workspace: {}", self.summary.workspace.display());
            println!(
                "  (run 'rm -rf {}' to clean up)",
                self.summary.workspace.display()
            );
        } else {
            println!("  Workspace removed.");
        }
    }
}

/// One `label  elapsed  (rate/s)  marker` report line
fn render_line(result: &TimingResult) -> String {
    let marker = if result.success {
        style("✓").green().to_string()
    } else {
        style("✗").red().to_string()
    };
    let rate = if result.items.is_some() {
        format!("  ({:>6.0}/s)", result.throughput())
    } else {
        String::new()
    };
    format!(
        "  {:<28} {:>8.3}s{rate} {marker}",
        result.label,
        result.elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(section: Section, label: &str, items: Option<u64>) -> TimingResult {
        TimingResult {
            section,
            label: label.into(),
            elapsed: Duration::from_millis(1500),
            success: true,
            items,
        }
    }

    #[test]
    fn line_includes_rate_only_when_items_are_known() {
        let with = render_line(&result(Section::Import, "import req (300)", Some(300)));
        assert!(with.contains("/s)"));
        let without = render_line(&result(Section::Listing, "req list --count", None));
        assert!(!without.contains("/s)"));
    }

    #[test]
    fn line_reports_elapsed_to_millisecond_precision() {
        let line = render_line(&result(Section::Cache, "cache rebuild", None));
        assert!(line.contains("1.500s"));
    }

    #[test]
    fn json_report_carries_every_phase_and_the_aggregates() {
        let results = vec![
            result(Section::Import, "init", None),
            result(Section::Cache, "cache rebuild", None),
        ];
        let summary = RunSummary::aggregate(&results, 970, Duration::ZERO, "/tmp/ws".into());
        let volumes = VolumeConfig::default();
        let report = RunReport {
            tool: Path::new("tdt"),
            started: Utc::now(),
            volumes: &volumes,
            results: &results,
            summary: &summary,
            workspace_kept: true,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
        assert_eq!(value["summary"]["operations"], 2);
        assert_eq!(value["summary"]["failures"], 0);
        assert_eq!(value["volumes"]["requirements"], 500);
    }
}
