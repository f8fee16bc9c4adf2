//! Campus route planner CLI library.
//!
//! Holds the built-in sample campus, the subcommand handlers and the output
//! formatters used by the `campusroute-cli` binary.

pub mod campus;
pub mod commands;
pub mod output;
