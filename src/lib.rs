//! Campus course and records manager
//!
//! Tracks students, courses, enrollments and grades in memory and computes credit-weighted
//! GPAs. The `ccrm` binary wraps this library with an interactive menu, CSV import/export,
//! backups and reports.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
