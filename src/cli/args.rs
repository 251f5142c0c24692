//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{baseline::BaselineArgs, run::RunArgs};

#[derive(Parser)]
#[command(name = "tdt-bench")]
#[command(author, version, about = "Tessera Design Toolkit benchmark harness")]
#[command(
    long_about = "Benchmarks a tdt binary end-to-end: generates synthetic project data at configurable volumes, imports it through the CLI, and times validation, listing, reporting and cache operations."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timed benchmark against a tdt binary
    Run(RunArgs),

    /// Write the hand-curated baseline fixture set (no randomness)
    Baseline(BaselineArgs),
}
