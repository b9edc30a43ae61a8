//! Window-manager command builders.
//!
//! Commands are plain i3 command strings; several actions can be chained in
//! one command with `, ` and are then applied to the same criteria.

use super::Rect;
use i3_quickterm_config::Position;
use std::fmt;

/// Gap between a bottom-attached terminal and the workspace's lower edge.
pub const BOTTOM_MARGIN: i64 = 6;

/// A command ready to be sent to the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmCommand {
    command: String,
}

impl WmCommand {
    fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.command
    }

    /// Put `mark` on the focused window.
    pub fn mark(mark: &str) -> Self {
        Self::new(format!("mark {mark}"))
    }

    /// Float the container and send it to the scratchpad.
    pub fn hide(con_id: i64) -> Self {
        Self::new(format!("[con_id={con_id}] floating enable, move scratchpad"))
    }

    /// Bring the window marked `mark` out of the scratchpad at `placement`.
    pub fn show_at(mark: &str, placement: Placement) -> Self {
        Self::new(format!(
            "[con_mark={mark}] move scratchpad, scratchpad show, \
             resize set {} px {} px, move absolute position {}px {}px",
            placement.width, placement.height, placement.x, placement.y
        ))
    }
}

impl fmt::Display for WmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// Target geometry of the terminal on a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Placement {
    /// Full workspace width, `ratio` of its height, glued to the `pos` edge.
    pub fn compute(workspace: Rect, ratio: f64, pos: Position) -> Self {
        let height = (workspace.height as f64 * ratio).floor() as i64;
        let y = match pos {
            Position::Top => workspace.y,
            Position::Bottom => workspace.y + workspace.height - height - BOTTOM_MARGIN,
        };
        Self {
            x: workspace.x,
            y,
            width: workspace.width,
            height,
        }
    }
}
