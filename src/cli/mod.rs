//! Command-line interface
//!
//! This module contains the CLI commands and argument parsing, plus the
//! key report printed by them.

pub mod commands;
pub mod report;

pub use commands::{Command, Opt, SchemeArg};
pub use report::{bulk_round_trip, KeyReport};
