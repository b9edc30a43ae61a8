//! Catalog of known terminal emulators and the `term` setting resolution.
//!
//! Each terminal is described by how it accepts a window title and the
//! command to run. A single renderer turns a descriptor into a command
//! template with `{title}` and `{expanded}` / `{string}` placeholders, which
//! the launcher later fills through [`crate::template`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// How a terminal expects the command it should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecFormat {
    /// The command is passed as separate argv tokens.
    Expanded,
    /// The command is passed as one shell-quoted string.
    String,
}

impl ExecFormat {
    /// Placeholder key used in the rendered template.
    pub fn placeholder(self) -> &'static str {
        match self {
            ExecFormat::Expanded => "expanded",
            ExecFormat::String => "string",
        }
    }
}

/// How to launch one terminal emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalDescriptor {
    pub name: &'static str,
    pub executable: &'static str,
    /// Flag preceding the command to run; empty when the command is positional.
    pub exec_option: &'static str,
    pub exec_format: ExecFormat,
    /// Flag preceding the window title, or `None` when the terminal cannot set one.
    pub title_option: Option<&'static str>,
}

impl TerminalDescriptor {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            executable: name,
            exec_option: "-e",
            exec_format: ExecFormat::Expanded,
            title_option: Some("-T"),
        }
    }

    const fn exec_option(mut self, option: &'static str) -> Self {
        self.exec_option = option;
        self
    }

    const fn title_option(mut self, option: Option<&'static str>) -> Self {
        self.title_option = option;
        self
    }

    const fn string_format(mut self) -> Self {
        self.exec_format = ExecFormat::String;
        self
    }

    /// Render `<executable> [<title_option> {title}] <exec_option> {<format>}`.
    pub fn template(&self) -> String {
        let mut parts = vec![self.executable.to_string()];
        if let Some(title_option) = self.title_option {
            parts.push(title_option.to_string());
            parts.push("{title}".to_string());
        }
        if !self.exec_option.is_empty() {
            parts.push(self.exec_option.to_string());
        }
        parts.push(format!("{{{}}}", self.exec_format.placeholder()));
        parts.join(" ")
    }
}

/// Known terminals, sorted by name. `auto` probes them in this order.
pub const TERMINALS: &[TerminalDescriptor] = &[
    TerminalDescriptor::new("alacritty").title_option(Some("-t")),
    TerminalDescriptor::new("foot").exec_option(""),
    TerminalDescriptor::new("gnome-terminal")
        .exec_option("--")
        .title_option(None),
    TerminalDescriptor::new("kitty"),
    TerminalDescriptor::new("roxterm"),
    TerminalDescriptor::new("st"),
    TerminalDescriptor::new("terminator").exec_option("-x"),
    TerminalDescriptor::new("termite")
        .string_format()
        .title_option(Some("-t")),
    TerminalDescriptor::new("urxvt"),
    TerminalDescriptor::new("urxvtc"),
    TerminalDescriptor::new("xfce4-terminal").string_format(),
    TerminalDescriptor::new("xterm"),
];

/// Look up a catalog entry by name.
pub fn find_terminal(name: &str) -> Option<&'static TerminalDescriptor> {
    TERMINALS.iter().find(|t| t.name == name)
}

/// Names of every catalog entry, in probe order.
pub fn terminal_names() -> Vec<String> {
    TERMINALS.iter().map(|t| t.name.to_string()).collect()
}

/// Resolve the `term` setting into a launch template using the process `PATH`.
///
/// - `"auto"`: the first catalog terminal found on `PATH`.
/// - a catalog name: that terminal's template.
/// - anything else: used verbatim as a custom template.
pub fn resolve_terminal(term: &str) -> Result<String, ConfigError> {
    let path_var = std::env::var_os("PATH");
    resolve_terminal_in(term, path_var.as_deref())
}

/// Same as [`resolve_terminal`] with an explicit `PATH` value.
pub fn resolve_terminal_in(term: &str, path_var: Option<&OsStr>) -> Result<String, ConfigError> {
    if term == "auto" {
        let found = path_var.and_then(|path_var| {
            TERMINALS
                .iter()
                .find(|t| find_executable_in(t.executable, path_var).is_some())
        });
        return match found {
            Some(terminal) => {
                log::debug!("auto-selected terminal {}", terminal.name);
                Ok(terminal.template())
            }
            None => Err(ConfigError::NoTerminalFound {
                catalog: terminal_names(),
            }),
        };
    }

    if let Some(terminal) = find_terminal(term) {
        return Ok(terminal.template());
    }

    Ok(term.to_string())
}

/// Search `path_var` for an executable file called `binary`.
pub fn find_executable_in(binary: &str, path_var: &OsStr) -> Option<PathBuf> {
    if binary.is_empty() {
        return None;
    }
    let path = Path::new(binary);
    if path.is_absolute() {
        return is_executable(path).then(|| path.to_path_buf());
    }
    std::env::split_paths(path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
