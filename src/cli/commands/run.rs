//! `tdt-bench run` - the timed benchmark pipeline
//!
//! Phases run in a fixed order and every phase is attempted regardless
//! of earlier failures: one pass reports every failing operation, not
//! just the first.

use chrono::Utc;
use console::style;
use miette::{miette, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::report::{ReportFormat, RunReport};
use crate::core::{
    write_fixture, CommandRunner, Invocation, RunSummary, Section, TimingResult, VolumeConfig,
    Workspace,
};
use crate::entities::EntityKind;

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Path to the tdt binary to benchmark (bare names resolve via PATH)
    #[arg(default_value = "tdt")]
    pub tool: PathBuf,

    /// Number of requirements to generate
    #[arg(long, default_value_t = 500)]
    pub requirements: usize,

    /// Number of components to generate
    #[arg(long, default_value_t = 200)]
    pub components: usize,

    /// Number of suppliers to generate
    #[arg(long, default_value_t = 20)]
    pub suppliers: usize,

    /// Number of risks to generate
    #[arg(long, default_value_t = 100)]
    pub risks: usize,

    /// Number of tests to generate
    #[arg(long, default_value_t = 150)]
    pub tests: usize,

    /// Exit non-zero if any benchmarked operation fails
    #[arg(long)]
    pub strict: bool,

    /// Remove the workspace after the run instead of keeping it for inspection
    #[arg(long)]
    pub cleanup: bool,

    /// Report output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: ReportFormat,

    /// Echo each operation as it completes (with stderr on failure)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let started = Utc::now();
    let tool = resolve_tool(&args.tool);
    let volumes = VolumeConfig {
        requirements: args.requirements,
        components: args.components,
        suppliers: args.suppliers,
        risks: args.risks,
        tests: args.tests,
    };

    println!(
        "{} Benchmarking {} ({} entities)",
        style("→").blue(),
        style(tool.display()).cyan(),
        volumes.total()
    );

    let workspace = Workspace::provision().map_err(|e| miette!("{}", e))?;
    println!(
        "{} Workspace: {}",
        style("→").blue(),
        workspace.root().display()
    );

    // Fixture generation and workspace writes must succeed; without them
    // there is nothing to benchmark.
    let generating = Instant::now();
    let mut rng = rand::rng();
    for kind in EntityKind::ALL {
        let records = kind.generate(volumes.count_for(kind), &mut rng);
        let path = workspace.data_dir().join(kind.fixture_file());
        write_fixture(&path, kind.csv_headers(), &records)
            .map_err(|e| miette!("failed to write {}: {}", path.display(), e))?;
    }
    let generation = generating.elapsed();
    println!(
        "{} Generated fixtures in {:.3}s",
        style("→").blue(),
        generation.as_secs_f64()
    );

    let runner = CommandRunner::new(&tool, workspace.project_dir());
    let results = execute_phases(&runner, &volumes, workspace.data_dir(), args.verbose);

    let summary = RunSummary::aggregate(
        &results,
        volumes.total() as u64,
        generation,
        workspace.root().to_path_buf(),
    );
    let failures = summary.failures;

    let report = RunReport {
        tool: &tool,
        started,
        volumes: &volumes,
        results: &results,
        summary: &summary,
        workspace_kept: !args.cleanup,
    };
    report.print(args.format)?;

    if args.cleanup {
        workspace
            .remove()
            .map_err(|e| miette!("failed to remove workspace: {}", e))?;
    }

    if args.strict && failures > 0 {
        return Err(miette!("{} benchmarked operation(s) failed", failures));
    }

    Ok(())
}

/// Drive the full benchmark battery, one timed invocation per phase.
pub fn execute_phases(
    runner: &CommandRunner,
    volumes: &VolumeConfig,
    data_dir: &Path,
    verbose: bool,
) -> Vec<TimingResult> {
    let mut rec = PhaseRecorder {
        results: Vec::new(),
        verbose,
    };

    progress("imports");
    rec.record(Section::Import, "init", None, runner.run(&["init", "-q"]));
    for kind in EntityKind::ALL {
        let count = volumes.count_for(kind);
        let fixture_path = data_dir.join(kind.fixture_file());
        let fixture = fixture_path.to_string_lossy();
        let inv = runner.run(&["import", kind.import_arg(), &fixture]);
        rec.record(
            Section::Import,
            format!("import {} ({})", kind.import_arg(), count),
            Some(count as u64),
            inv,
        );
    }

    progress("validation");
    rec.record(
        Section::Validation,
        "validate",
        Some(volumes.total() as u64),
        runner.run(&["validate"]),
    );
    rec.record(
        Section::Validation,
        "validate --fix",
        None,
        runner.run(&["validate", "--fix"]),
    );

    progress("listings");
    let listings: [(&[&str], String); 8] = [
        (
            &["req", "list"],
            format!("req list ({})", volumes.requirements),
        ),
        (
            &["cmp", "list"],
            format!("cmp list ({})", volumes.components),
        ),
        (&["risk", "list"], format!("risk list ({})", volumes.risks)),
        (&["test", "list"], format!("test list ({})", volumes.tests)),
        (
            &["req", "list", "--format", "json"],
            "req list --format json".to_string(),
        ),
        (
            &["req", "list", "--priority", "critical"],
            "req list --priority critical".to_string(),
        ),
        (&["risk", "list", "--by-rpn"], "risk list --by-rpn".to_string()),
        (&["req", "list", "--count"], "req list --count".to_string()),
    ];
    for (cmd, label) in listings {
        let inv = runner.run(cmd);
        rec.record(Section::Listing, label, None, inv);
    }

    progress("status & reports");
    let reports: [&[&str]; 7] = [
        &["status"],
        &["status", "--detailed"],
        &["report", "rvm"],
        &["report", "fmea"],
        &["report", "test-status"],
        &["report", "open-issues"],
        &["trace", "matrix"],
    ];
    for cmd in reports {
        let inv = runner.run(cmd);
        rec.record(Section::StatusReport, cmd.join(" "), None, inv);
    }

    progress("cache");
    rec.record(
        Section::Cache,
        "cache status",
        None,
        runner.run(&["cache", "status"]),
    );
    rec.record(
        Section::Cache,
        "cache rebuild",
        None,
        runner.run(&["cache", "rebuild"]),
    );
    // Second rebuild hits an already-warm cache; recorded separately so
    // cold and warm rebuild cost can be compared.
    rec.record(
        Section::Cache,
        "cache rebuild (warm)",
        None,
        runner.run(&["cache", "rebuild"]),
    );

    rec.results
}

fn progress(section: &str) {
    println!("{} Benchmarking {}...", style("→").blue(), section);
}

struct PhaseRecorder {
    results: Vec<TimingResult>,
    verbose: bool,
}

impl PhaseRecorder {
    fn record(
        &mut self,
        section: Section,
        label: impl Into<String>,
        items: Option<u64>,
        invocation: Invocation,
    ) {
        let label = label.into();
        if self.verbose {
            let marker = if invocation.success {
                style("✓").green().to_string()
            } else {
                style("✗").red().to_string()
            };
            println!(
                "  {marker} {label} ({:.3}s)",
                invocation.elapsed.as_secs_f64()
            );
            if !invocation.success {
                if let Some(line) = invocation.stderr.lines().next() {
                    println!("    {}", style(line).dim());
                }
            }
        }
        self.results.push(TimingResult {
            section,
            label,
            elapsed: invocation.elapsed,
            success: invocation.success,
            items,
        });
    }
}

/// Canonicalize path-like tool arguments before the runner pins the
/// working directory elsewhere; bare names are left for PATH
/// resolution.
fn resolve_tool(tool: &Path) -> PathBuf {
    if tool.components().count() > 1 || tool.exists() {
        fs::canonicalize(tool).unwrap_or_else(|_| tool.to_path_buf())
    } else {
        tool.to_path_buf()
    }
}
