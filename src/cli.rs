//! Command-line interface for i3-quickterm.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// A small drop-down terminal for i3 and sway
#[derive(Parser, Debug)]
#[command(name = "i3-quickterm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run the shell in the current window (used by spawned terminals)
    #[arg(short = 'i', long = "in-place")]
    pub in_place: bool,

    /// Print every window-manager command and exec call
    #[arg(short, long)]
    pub verbose: bool,

    /// Read config from the specified file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Shell to toggle (a key of the `shells` config map)
    #[arg(value_name = "SHELL")]
    pub shell: Option<String>,
}

/// Runtime options passed from the CLI to the launcher
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub shell: Option<String>,
    pub in_place: bool,
    pub verbose: bool,
    /// Explicit config file; `None` means discover it
    pub config: Option<PathBuf>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            shell: cli.shell,
            in_place: cli.in_place,
            verbose: cli.verbose,
            config: cli.config,
        }
    }
}

/// Parse the process arguments. Help, version and usage errors exit here.
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}

/// Parse an explicit argument list (first item is the program name).
pub fn parse_from<I, T>(args: I) -> Result<RuntimeOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Into::into)
}
