//! Window-manager facade.
//!
//! The launcher only needs three things from the window manager: the focused
//! workspace, windows carrying a given mark, and a way to send a command
//! string. [`WindowManager`] captures exactly that; [`ipc::I3Connection`]
//! implements it with the `swayipc` client and tests substitute a
//! recording fake.
//!
//! Queries return owned snapshots. Nothing is cached between calls.

pub mod commands;
pub mod ipc;
pub mod tree;

pub use commands::{Placement, WmCommand};

use crate::error::Result;
use regex::Regex;

/// Prefix shared by every mark this launcher puts on a window.
pub const MARK_PREFIX: &str = "quickterm_";

/// The mark identifying the window running `shell`.
pub fn mark_for(shell: &str) -> String {
    format!("{MARK_PREFIX}{shell}")
}

/// Anchored regular expression matched against window marks.
#[derive(Debug, Clone)]
pub struct MarkPattern {
    regex: Regex,
}

impl MarkPattern {
    /// Matches the window of any shell.
    pub fn any() -> Self {
        Self::from_source(&format!("^{MARK_PREFIX}.*"))
    }

    /// Matches only the window of `shell`.
    pub fn shell(shell: &str) -> Self {
        Self::from_source(&format!("^{}$", regex::escape(&mark_for(shell))))
    }

    fn from_source(source: &str) -> Self {
        // Both sources are either constant or fully escaped.
        let regex = Regex::new(source).expect("mark pattern is always a valid regex");
        Self { regex }
    }

    pub fn is_match(&self, mark: &str) -> bool {
        self.regex.is_match(mark)
    }

    pub fn matches_any(&self, marks: &[String]) -> bool {
        marks.iter().any(|m| self.is_match(m))
    }
}

/// Rectangle in window-manager pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub name: String,
    pub rect: Rect,
}

/// A marked container as seen at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub id: i64,
    pub marks: Vec<String>,
    /// Name of the workspace holding the window (`__i3_scratch` when hidden).
    pub workspace: Option<String>,
}

impl Window {
    pub fn is_on(&self, workspace: &Workspace) -> bool {
        self.workspace.as_deref() == Some(workspace.name.as_str())
    }
}

/// Where to look for marked windows.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    /// The whole tree, scratchpad included.
    Tree,
    /// Only windows on this workspace.
    Workspace(&'a Workspace),
}

impl Scope<'_> {
    pub fn contains(&self, window: &Window) -> bool {
        match self {
            Scope::Tree => true,
            Scope::Workspace(ws) => window.is_on(ws),
        }
    }
}

pub trait WindowManager {
    /// Workspace containing the focused window, if anything is focused.
    fn focused_workspace(&mut self) -> Result<Option<Workspace>>;

    /// Windows in `scope` with at least one mark matching `pattern`, in tree order.
    fn find_marked(&mut self, scope: Scope<'_>, pattern: &MarkPattern) -> Result<Vec<Window>>;

    /// Send one command string. Only transport failures are errors.
    fn command(&mut self, command: &WmCommand) -> Result<()>;
}

impl<W: WindowManager + ?Sized> WindowManager for &mut W {
    fn focused_workspace(&mut self) -> Result<Option<Workspace>> {
        (**self).focused_workspace()
    }

    fn find_marked(&mut self, scope: Scope<'_>, pattern: &MarkPattern) -> Result<Vec<Window>> {
        (**self).find_marked(scope, pattern)
    }

    fn command(&mut self, command: &WmCommand) -> Result<()> {
        (**self).command(command)
    }
}

/// Echoes every command to stdout before forwarding it.
pub struct Verbose<W> {
    inner: W,
}

impl<W: WindowManager> Verbose<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: WindowManager> WindowManager for Verbose<W> {
    fn focused_workspace(&mut self) -> Result<Option<Workspace>> {
        self.inner.focused_workspace()
    }

    fn find_marked(&mut self, scope: Scope<'_>, pattern: &MarkPattern) -> Result<Vec<Window>> {
        self.inner.find_marked(scope, pattern)
    }

    fn command(&mut self, command: &WmCommand) -> Result<()> {
        println!("command: {}", command.as_str());
        self.inner.command(command)
    }
}
