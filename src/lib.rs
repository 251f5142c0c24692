//! tdt-bench: benchmark harness for the Tessera Design Toolkit CLI
//!
//! Drives a `tdt` binary as a black-box subprocess: generates synthetic
//! CSV fixtures, feeds them through the import/validate/list/report/cache
//! command surface in a fixed lifecycle order, and records per-operation
//! wall-clock time and success.

pub mod cli;
pub mod core;
pub mod entities;
