//! Building and running the command lines that replace this process.
//!
//! A new quickterm window is created by exec'ing a terminal emulator that
//! runs this program again in in-place mode; in-place mode then exec's the
//! configured shell. Both argv vectors are computed here from a [`LaunchEnv`]
//! so the decisions stay testable without touching the real environment.

use crate::error::{QuicktermError, Result};
use i3_quickterm_config::{Config, Substitutions, expand_with, quoted, resolve_terminal_in};
use std::ffi::OsString;
use std::os::unix::process::CommandExt;
use std::process::Command;

pub const PROGRAM_NAME: &str = "i3-quickterm";

/// Window title given to the terminal running `shell`.
pub fn term_title(shell: &str) -> String {
    format!("{shell} - {PROGRAM_NAME}")
}

/// Process environment the launch commands are computed from.
#[derive(Debug, Clone)]
pub struct LaunchEnv {
    /// How this program was invoked (argv[0]).
    pub program: String,
    /// Search path used when `term` is `auto`.
    pub path: Option<OsString>,
    /// Environment substitutions for templates.
    pub vars: Substitutions,
}

impl LaunchEnv {
    pub fn current() -> Self {
        let program = std::env::args_os()
            .next()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| PROGRAM_NAME.to_string());
        Self {
            program,
            path: std::env::var_os("PATH"),
            vars: Substitutions::from_env(),
        }
    }
}

/// Command line re-running this program in-place for `shell`, forwarding
/// the verbose flag and an explicitly chosen config file.
pub fn self_invocation(config: &Config, env: &LaunchEnv, shell: &str) -> String {
    let mut cmd = format!("{} -i {shell}", env.program);
    if config.verbose {
        cmd.push_str(" -v");
    }
    if let Some(path) = &config.config_file {
        cmd.push_str(&format!(" -c {}", path.display()));
    }
    cmd
}

/// Argv launching the configured terminal with a fresh in-place quickterm.
pub fn terminal_argv(config: &Config, env: &LaunchEnv, shell: &str) -> Result<Vec<String>> {
    let template = resolve_terminal_in(&config.term, env.path.as_deref())?;
    let invocation = self_invocation(config, env, shell);
    let subs = env
        .vars
        .clone()
        .with("title", quoted(&term_title(shell)))
        .with("string", quoted(&invocation))
        .with("expanded", invocation);
    Ok(expand_with(&template, &subs)?)
}

/// Argv of the configured command for `shell`.
pub fn shell_argv(config: &Config, env: &LaunchEnv, shell: &str) -> Result<Vec<String>> {
    let template = config
        .shell_command(shell)
        .ok_or_else(|| QuicktermError::UnknownShell(shell.to_string()))?;
    Ok(expand_with(template, &env.vars)?)
}

/// Replace the current process with `argv`, searching `PATH` for the program.
///
/// Only returns if the exec failed.
pub fn exec(argv: &[String], verbose: bool) -> QuicktermError {
    if verbose {
        println!("execvp: {argv:?}");
    }
    let Some((program, args)) = argv.split_first() else {
        return QuicktermError::EmptyCommand("exec".to_string());
    };
    log::info!("exec {:?}", argv);
    let source = Command::new(program).args(args).exec();
    QuicktermError::Exec {
        program: program.clone(),
        source,
    }
}
