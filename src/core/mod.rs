//! Core module - benchmark primitives

pub mod config;
pub mod runner;
pub mod timing;
pub mod workspace;
pub mod writer;

pub use config::VolumeConfig;
pub use runner::{CommandRunner, Invocation};
pub use timing::{RunSummary, Section, TimingResult};
pub use workspace::{Workspace, WorkspaceError};
pub use writer::write_fixture;
