//! Core records functionality: domain model, services, adapters and reporting

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod report;
pub mod sample;
pub mod services;

pub use error::{RecordsError, Result};

/// Returns the current version of the `campus-records` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
