//! Subcommand handlers.
//!
//! Each handler prints to stdout for the user and returns the process exit
//! code; diagnostics go through tracing (stderr and the log file).

pub mod clip;
pub mod host;
pub mod paths;
pub mod settings;
