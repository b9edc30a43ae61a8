//! Layout tree reduced to what the launcher reads.
//!
//! [`TreeNode`] is built from the `swayipc` reply once per query; the walks
//! below turn it into [`Workspace`] and [`Window`] snapshots.

use super::{Rect, Window, Workspace};
use swayipc::{Node, NodeType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub id: i64,
    pub is_workspace: bool,
    pub name: Option<String>,
    pub rect: Rect,
    pub marks: Vec<String>,
    pub focused: bool,
    /// Tiling children followed by floating children.
    pub children: Vec<TreeNode>,
}

impl From<&Node> for TreeNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            is_workspace: matches!(node.node_type, NodeType::Workspace),
            name: node.name.clone(),
            rect: Rect::new(
                i64::from(node.rect.x),
                i64::from(node.rect.y),
                i64::from(node.rect.width),
                i64::from(node.rect.height),
            ),
            marks: node.marks.clone(),
            focused: node.focused,
            children: node
                .nodes
                .iter()
                .chain(&node.floating_nodes)
                .map(TreeNode::from)
                .collect(),
        }
    }
}

impl TreeNode {
    fn as_workspace(&self) -> Workspace {
        Workspace {
            name: self.name.clone().unwrap_or_default(),
            rect: self.rect,
        }
    }

    /// Depth-first walk; `visit` also receives the enclosing workspace, which
    /// is the node itself for workspace nodes.
    fn walk<'a, F>(&'a self, workspace: Option<&'a TreeNode>, visit: &mut F)
    where
        F: FnMut(&'a TreeNode, Option<&'a TreeNode>),
    {
        let workspace = if self.is_workspace {
            Some(self)
        } else {
            workspace
        };
        visit(self, workspace);
        for child in &self.children {
            child.walk(workspace, visit);
        }
    }

    /// Workspace holding the focused node.
    pub fn focused_workspace(&self) -> Option<Workspace> {
        let mut found = None;
        self.walk(None, &mut |node, ws| {
            if found.is_none() && node.focused {
                found = ws.map(TreeNode::as_workspace);
            }
        });
        found
    }

    /// Every node with at least one mark, with its workspace.
    pub fn marked_windows(&self) -> Vec<Window> {
        let mut windows = Vec::new();
        self.walk(None, &mut |node, ws| {
            if !node.marks.is_empty() {
                windows.push(Window {
                    id: node.id,
                    marks: node.marks.clone(),
                    workspace: ws.and_then(|w| w.name.clone()),
                });
            }
        });
        windows
    }
}
