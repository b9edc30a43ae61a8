//! Configuration layer for i3-quickterm.
//!
//! - [`config`]: the `Config` struct, file overrides, discovery and loading
//! - [`defaults`]: default value for every key
//! - [`template`]: `{name}` command templates and shell-word splitting
//! - [`terminals`]: known terminal emulators and `term` resolution

pub mod config;
pub mod defaults;
pub mod error;
pub mod template;
pub mod terminals;
mod types;

pub use config::{CONFIG_LOCATIONS, Config, ConfigOverrides};
pub use error::ConfigError;
pub use template::{Substitutions, expand_command, expand_with, format_template, quoted};
pub use terminals::{
    ExecFormat, TERMINALS, TerminalDescriptor, find_executable_in, find_terminal,
    resolve_terminal, resolve_terminal_in, terminal_names,
};
pub use types::Position;
