//! Toggle decision engine.
//!
//! Every invocation starts from a fresh look at the window manager. The
//! decision functions take those snapshots as arguments and return an
//! [`Outcome`]; nothing is sent or exec'd until [`Outcome::apply`].
//!
//! Toggle mode, for a requested shell `s`:
//! - no window marked for `s` anywhere: exec a terminal running
//!   `i3-quickterm -i s`
//! - window on the focused workspace: hide it
//! - window elsewhere (scratchpad included): hide it, then show it on the
//!   focused workspace
//!
//! Without a requested shell, any quickterm window on the focused workspace
//! is hidden; otherwise the menu picks the shell.

use crate::error::{QuicktermError, Result};
use crate::launch::{self, LaunchEnv};
use crate::picker::{Menu, select_shell_with_history};
use crate::wm::{
    MarkPattern, Placement, Scope, Window, WindowManager, WmCommand, Workspace, mark_for,
};
use i3_quickterm_config::Config;

/// What an invocation should do once the decision is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing (the menu was cancelled).
    Noop,
    /// Send these commands, in order, and exit.
    SendCommands(Vec<WmCommand>),
    /// Send `prelude`, then replace this process with `argv`.
    ReplaceProcess {
        prelude: Vec<WmCommand>,
        argv: Vec<String>,
    },
}

impl Outcome {
    /// Carry out the outcome. Returns only if nothing was exec'd or exec failed.
    pub fn apply(self, wm: &mut dyn WindowManager, verbose: bool) -> Result<()> {
        match self {
            Outcome::Noop => Ok(()),
            Outcome::SendCommands(commands) => send_all(wm, &commands),
            Outcome::ReplaceProcess { prelude, argv } => {
                send_all(wm, &prelude)?;
                Err(launch::exec(&argv, verbose))
            }
        }
    }
}

fn send_all(wm: &mut dyn WindowManager, commands: &[WmCommand]) -> Result<()> {
    commands.iter().try_for_each(|c| wm.command(c))
}

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub shell: Option<String>,
    pub in_place: bool,
}

impl Request {
    /// Reject requests that cannot succeed, before any window-manager traffic.
    pub fn validate(&self, config: &Config) -> Result<()> {
        match &self.shell {
            Some(shell) if !config.has_shell(shell) => {
                Err(QuicktermError::UnknownShell(shell.clone()))
            }
            None if self.in_place => Err(QuicktermError::MissingInPlaceShell),
            _ => Ok(()),
        }
    }
}

/// Reposition command for the window of `shell` on `workspace`.
pub fn show_on(config: &Config, shell: &str, workspace: &Workspace) -> WmCommand {
    let placement = Placement::compute(workspace.rect, config.ratio, config.pos);
    WmCommand::show_at(&mark_for(shell), placement)
}

/// In-place mode: mark the window we are running in, place it, run the shell.
pub fn decide_in_place(
    config: &Config,
    shell: &str,
    workspace: Option<&Workspace>,
    env: &LaunchEnv,
) -> Result<Outcome> {
    let mut prelude = vec![WmCommand::mark(&mark_for(shell))];
    match workspace {
        Some(ws) => prelude.push(show_on(config, shell, ws)),
        None => log::warn!("no focused workspace, leaving the {shell} window where it is"),
    }
    Ok(Outcome::ReplaceProcess {
        prelude,
        argv: launch::shell_argv(config, env, shell)?,
    })
}

/// No shell requested: hide whatever quickterm is showing on the workspace.
pub fn decide_hide_visible(visible: Option<&Window>) -> Option<Outcome> {
    visible.map(|w| Outcome::SendCommands(vec![WmCommand::hide(w.id)]))
}

/// Shell known: spawn, hide, or bring its window to the focused workspace.
pub fn decide_toggle(
    config: &Config,
    shell: &str,
    current: Option<&Workspace>,
    existing: Option<&Window>,
    env: &LaunchEnv,
) -> Result<Outcome> {
    let Some(window) = existing else {
        return Ok(Outcome::ReplaceProcess {
            prelude: Vec::new(),
            argv: launch::terminal_argv(config, env, shell)?,
        });
    };

    let mut commands = vec![WmCommand::hide(window.id)];
    if let Some(ws) = current
        && !window.is_on(ws)
    {
        commands.push(show_on(config, shell, ws));
    }
    Ok(Outcome::SendCommands(commands))
}

/// Query the window manager (and the menu, if needed) and decide.
pub fn run(
    config: &Config,
    request: &Request,
    wm: &mut dyn WindowManager,
    menu: &mut dyn Menu,
    env: &LaunchEnv,
) -> Result<Outcome> {
    request.validate(config)?;

    let current = wm.focused_workspace()?;

    if request.in_place {
        let shell = request
            .shell
            .as_deref()
            .ok_or(QuicktermError::MissingInPlaceShell)?;
        return decide_in_place(config, shell, current.as_ref(), env);
    }

    let shell = match &request.shell {
        Some(shell) => shell.clone(),
        None => {
            if let Some(ws) = &current {
                let visible = wm.find_marked(Scope::Workspace(ws), &MarkPattern::any())?;
                if let Some(outcome) = decide_hide_visible(visible.first()) {
                    return Ok(outcome);
                }
            }
            match select_shell_with_history(config, menu)? {
                Some(shell) => shell,
                None => return Ok(Outcome::Noop),
            }
        }
    };

    let existing = wm
        .find_marked(Scope::Tree, &MarkPattern::shell(&shell))?
        .into_iter()
        .next();
    decide_toggle(config, &shell, current.as_ref(), existing.as_ref(), env)
}
