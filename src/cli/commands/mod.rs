//! CLI command handlers for `ccrm`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod menu;
pub mod records;
pub mod session;
