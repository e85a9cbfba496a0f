//! massedit CLI
//!
//! Library side of the `massedit` binary: configuration, record files and
//! the commands themselves. The binary only parses arguments, installs
//! logging and prints.

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;

pub use config::Config;
pub use error::{CliError, CliResult};
