//! Typed errors for the launcher.
//!
//! Every variant is fatal for the invocation: `main` prints the chain once
//! and exits with status 1.

use i3_quickterm_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuicktermError {
    /// A shell was requested on the command line that is not configured.
    #[error("unknown shell: {0}")]
    UnknownShell(String),

    /// The menu returned a line that is not a configured shell.
    #[error("Unknown shell: {0}")]
    UnknownSelection(String),

    /// In-place mode was requested without naming a shell.
    #[error("shell should be provided when running in place")]
    MissingInPlaceShell,

    /// Template expansion, terminal resolution or config I/O failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Talking to the window manager failed.
    #[error("window manager IPC error: {0}")]
    Ipc(#[from] swayipc::Error),

    /// The menu program could not be run.
    #[error("menu command failed: {0}")]
    Menu(#[source] std::io::Error),

    /// The history file could not be opened, locked or written.
    #[error("history file {path}: {source}")]
    History {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Replacing the process image failed (exec only returns on error).
    #[error("failed to exec {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An exec outcome carried no program to run.
    #[error("empty command line for {0}")]
    EmptyCommand(String),
}

pub type Result<T> = std::result::Result<T, QuicktermError>;
