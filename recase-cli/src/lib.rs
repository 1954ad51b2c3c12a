//! Recase CLI library
//!
//! This library provides the command-line interface around the recase-core
//! case transformation engine.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
