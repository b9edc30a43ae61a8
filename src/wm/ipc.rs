//! [`WindowManager`] over the i3/sway IPC socket.
//!
//! `swayipc` locates the socket (`I3SOCK`, `SWAYSOCK`, then asking the `i3`
//! or `sway` binary) and speaks the protocol; this module only adapts its
//! replies.

use super::tree::TreeNode;
use super::{MarkPattern, Scope, Window, WindowManager, WmCommand, Workspace};
use crate::error::Result;
use swayipc::Connection;

/// Connection to a running i3 or sway instance.
pub struct I3Connection {
    connection: Connection,
}

impl I3Connection {
    pub fn connect() -> Result<Self> {
        let connection = Connection::new()?;
        log::debug!("connected to the window manager IPC socket");
        Ok(Self { connection })
    }

    /// Fetch a fresh snapshot of the layout tree.
    pub fn tree(&mut self) -> Result<TreeNode> {
        let root = self.connection.get_tree()?;
        Ok(TreeNode::from(&root))
    }
}

impl WindowManager for I3Connection {
    fn focused_workspace(&mut self) -> Result<Option<Workspace>> {
        Ok(self.tree()?.focused_workspace())
    }

    fn find_marked(&mut self, scope: Scope<'_>, pattern: &MarkPattern) -> Result<Vec<Window>> {
        Ok(self
            .tree()?
            .marked_windows()
            .into_iter()
            .filter(|w| scope.contains(w) && pattern.matches_any(&w.marks))
            .collect())
    }

    fn command(&mut self, command: &WmCommand) -> Result<()> {
        log::debug!("RUN_COMMAND {}", command);
        for outcome in self.connection.run_command(command.as_str())? {
            if let Err(e) = outcome {
                log::warn!("command '{}' failed: {e}", command);
            }
        }
        Ok(())
    }
}
