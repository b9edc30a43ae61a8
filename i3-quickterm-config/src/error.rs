//! Typed error variants for the i3-quickterm-config crate.
//!
//! Config loading never fails hard (a broken file falls back to defaults),
//! but callers still need to tell *why* a file was rejected, and template
//! expansion or terminal resolution errors must surface to the launcher.

use thiserror::Error;

/// Errors produced while reading config files, expanding command templates
/// or resolving the terminal emulator.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was not valid JSON, or a value had the wrong shape.
    #[error("JSON parse error in config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A command template could not be expanded.
    #[error("invalid command template '{template}': {reason}")]
    Template {
        /// The template as written in the config.
        template: String,
        /// What went wrong (missing key, unbalanced brace, bad quoting).
        reason: String,
    },

    /// `term` was `auto` and none of the known terminals is installed.
    #[error("Could not find a suitable terminal in the predefined list: {catalog:?}")]
    NoTerminalFound {
        /// Names of every terminal that was probed, in probe order.
        catalog: Vec<String>,
    },
}
