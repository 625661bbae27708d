//! Dignum CLI library
//!
//! This library provides the command-line interface for parsing unsigned
//! decimals and digit-in-base expressions with `dignum-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod outcome;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
pub use outcome::{Grammar, Outcome};
