//! Benchmark subcommands

pub mod baseline;
pub mod run;
