//! Vitae CLI library.
//!
//! This library provides the core functionality for the Vitae command-line interface:
//! batch extraction over CV text files, flat tabular rows, summary statistics,
//! configuration management and output formatting.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod summary;
pub mod tabular;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use tabular::{TabularRow, COLUMNS};
