//! Configuration management
//!
//! This module handles the runtime settings of the command-line tool:
//! log level, default WIF form and the bulk round-trip count.

pub mod settings;

pub use settings::{Config, DEFAULT_BULK_COUNT, GLOBAL_CONFIG};
