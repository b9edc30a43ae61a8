//! Shell selection through an external menu program.

use crate::error::{QuicktermError, Result};
use crate::history::{HistoryFile, open_history, promote};
use i3_quickterm_config::{Config, expand_command};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Something that lets the user pick one line out of a list.
pub trait Menu {
    /// Offer `candidates` in order and return the chosen line, trimmed.
    /// `None` means nothing was chosen.
    fn choose(&mut self, candidates: &[String]) -> Result<Option<String>>;
}

/// Menu backed by a dmenu-style program: candidates on stdin, choice on stdout.
#[derive(Debug, Clone)]
pub struct CommandMenu {
    template: String,
}

impl CommandMenu {
    /// `template` is expanded against the environment when the menu is shown.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.menu.clone())
    }
}

impl Menu for CommandMenu {
    fn choose(&mut self, candidates: &[String]) -> Result<Option<String>> {
        let argv = expand_command(&self.template)?;
        let Some((program, args)) = argv.split_first() else {
            return Err(QuicktermError::EmptyCommand("menu".to_string()));
        };
        log::debug!("running menu {:?}", argv);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(QuicktermError::Menu)?;

        if let Some(mut stdin) = child.stdin.take() {
            for candidate in candidates {
                match writeln!(stdin, "{candidate}") {
                    Ok(()) => {}
                    // The menu may exit without reading everything.
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => break,
                    Err(e) => return Err(QuicktermError::Menu(e)),
                }
            }
        }

        let output = child.wait_with_output().map_err(QuicktermError::Menu)?;
        if !output.status.success() {
            log::debug!("menu exited with {}", output.status);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let choice = stdout.lines().next().unwrap_or("").trim();
        Ok((!choice.is_empty()).then(|| choice.to_string()))
    }
}

/// Menu candidates: the history order when valid, otherwise the sorted shells.
pub fn candidates(config: &Config, history: Option<&mut HistoryFile>) -> Vec<String> {
    let shells = config.shell_names();
    history
        .and_then(|h| h.read_order(&shells))
        .unwrap_or(shells)
}

/// Ask the user for a shell, recording the choice in `history`.
///
/// Returns `None` when the menu produced nothing. A choice that is not a
/// configured shell is an error and leaves the history untouched.
pub fn select_shell(
    config: &Config,
    mut history: Option<&mut HistoryFile>,
    menu: &mut dyn Menu,
) -> Result<Option<String>> {
    let order = candidates(config, history.as_deref_mut());

    let Some(shell) = menu.choose(&order)? else {
        log::info!("shell selection cancelled");
        return Ok(None);
    };

    if !config.has_shell(&shell) {
        return Err(QuicktermError::UnknownSelection(shell));
    }

    if let Some(history) = history {
        history.write_order(&promote(&order, &shell))?;
    }

    Ok(Some(shell))
}

/// [`select_shell`] with the configured history file locked for the duration.
pub fn select_shell_with_history(config: &Config, menu: &mut dyn Menu) -> Result<Option<String>> {
    let mut history = open_history(config)?;
    select_shell(config, history.as_mut(), menu)
}
