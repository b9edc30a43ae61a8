//! Shared integration test helpers for i3-quickterm.
//!
//! ```ignore
//! mod common;
//! use common::{FakeWm, FixedMenu, test_config};
//! ```

#![allow(dead_code)]

use i3_quickterm::error::Result;
use i3_quickterm::launch::LaunchEnv;
use i3_quickterm::picker::Menu;
use i3_quickterm::wm::{MarkPattern, Rect, Scope, Window, WindowManager, WmCommand, Workspace};
use i3_quickterm_config::{Config, Substitutions};
use std::collections::BTreeMap;
use tempfile::TempDir;

/// In-memory window manager recording every interaction.
#[derive(Debug, Default)]
pub struct FakeWm {
    pub focused: Option<Workspace>,
    pub windows: Vec<Window>,
    pub commands: Vec<String>,
    pub queries: usize,
}

impl FakeWm {
    pub fn on_workspace(name: &str, rect: Rect) -> Self {
        Self {
            focused: Some(Workspace {
                name: name.to_string(),
                rect,
            }),
            ..Self::default()
        }
    }

    pub fn with_window(mut self, id: i64, mark: &str, workspace: &str) -> Self {
        self.windows.push(Window {
            id,
            marks: vec![mark.to_string()],
            workspace: Some(workspace.to_string()),
        });
        self
    }

    pub fn interactions(&self) -> usize {
        self.queries + self.commands.len()
    }
}

impl WindowManager for FakeWm {
    fn focused_workspace(&mut self) -> Result<Option<Workspace>> {
        self.queries += 1;
        Ok(self.focused.clone())
    }

    fn find_marked(&mut self, scope: Scope<'_>, pattern: &MarkPattern) -> Result<Vec<Window>> {
        self.queries += 1;
        Ok(self
            .windows
            .iter()
            .filter(|w| scope.contains(w) && pattern.matches_any(&w.marks))
            .cloned()
            .collect())
    }

    fn command(&mut self, command: &WmCommand) -> Result<()> {
        self.commands.push(command.as_str().to_string());
        Ok(())
    }
}

/// Menu returning a fixed answer and remembering what it was offered.
#[derive(Debug, Default)]
pub struct FixedMenu {
    pub answer: Option<String>,
    pub offered: Option<Vec<String>>,
}

impl FixedMenu {
    pub fn answering(answer: Option<&str>) -> Self {
        Self {
            answer: answer.map(str::to_string),
            offered: None,
        }
    }

    pub fn was_shown(&self) -> bool {
        self.offered.is_some()
    }
}

impl Menu for FixedMenu {
    fn choose(&mut self, candidates: &[String]) -> Result<Option<String>> {
        self.offered = Some(candidates.to_vec());
        Ok(self.answer.clone())
    }
}

/// Config with an `xterm` terminal, the given shells, and history kept in
/// a fresh temp directory. Keep the `TempDir` alive for the whole test.
pub fn test_config(shells: &[(&str, &str)]) -> (Config, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let shells: BTreeMap<String, String> = shells
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config {
        menu: "/bin/true".to_string(),
        term: "xterm".to_string(),
        history: Some(dir.path().join("shells.order").display().to_string()),
        shells,
        ..Config::default()
    };
    (config, dir)
}

pub fn test_env() -> LaunchEnv {
    LaunchEnv {
        program: "i3-quickterm".to_string(),
        path: None,
        vars: Substitutions::from_vars([("HOME", "/home/test"), ("SHELL", "/bin/bash")]),
    }
}
