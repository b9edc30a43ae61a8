//! Core `Config` struct and the file-level overrides merged into it.

use crate::defaults;
use crate::types::Position;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Settings for one launcher invocation.
///
/// Built once from defaults, then the config file, then command-line flags,
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Menu command template; candidates are written to its stdin.
    pub menu: String,
    /// A catalog terminal name, `"auto"`, or a custom launch template.
    pub term: String,
    /// History file path template, or `None` when history is disabled.
    pub history: Option<String>,
    /// Fraction of the workspace height given to the terminal.
    pub ratio: f64,
    /// Edge of the workspace the terminal is attached to.
    pub pos: Position,
    /// Shell identifier to shell command template.
    pub shells: BTreeMap<String, String>,

    // --- Runtime flags (never read from the file) ---
    /// Echo every window-manager command and exec call.
    #[serde(skip)]
    pub verbose: bool,
    /// Config file passed explicitly with `-c`, forwarded to spawned terminals.
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu: defaults::menu(),
            term: defaults::term(),
            history: defaults::history(),
            ratio: defaults::ratio(),
            pos: Position::default(),
            shells: defaults::shells(),
            verbose: false,
            config_file: None,
        }
    }
}

/// Keys read from a config file. A missing key keeps the current value.
///
/// `history` distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(None)`), which disables history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigOverrides {
    pub menu: Option<String>,
    pub term: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub history: Option<Option<String>>,
    pub ratio: Option<f64>,
    pub pos: Option<Position>,
    pub shells: Option<BTreeMap<String, String>>,
}

/// Marks a key as present, keeping `null` as `Some(None)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Config {
    /// Replace every field the overrides carry. Maps are replaced wholesale,
    /// not merged key by key.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides {
            menu,
            term,
            history,
            ratio,
            pos,
            shells,
        } = overrides;

        if let Some(menu) = menu {
            self.menu = menu;
        }
        if let Some(term) = term {
            self.term = term;
        }
        if let Some(history) = history {
            self.history = history;
        }
        if let Some(ratio) = ratio {
            self.ratio = ratio;
        }
        if let Some(pos) = pos {
            self.pos = pos;
        }
        if let Some(shells) = shells {
            self.shells = shells;
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.apply(overrides);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Reset out-of-range values to their defaults, logging a warning for each.
    pub fn validate(&mut self) {
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            log::warn!(
                "ratio {} is outside (0, 1], using {}",
                self.ratio,
                defaults::ratio()
            );
            self.ratio = defaults::ratio();
        }
        if self.shells.is_empty() {
            log::warn!("no shells configured");
        }
    }

    pub fn has_shell(&self, shell: &str) -> bool {
        self.shells.contains_key(shell)
    }

    pub fn shell_command(&self, shell: &str) -> Option<&str> {
        self.shells.get(shell).map(String::as_str)
    }

    /// Configured shell identifiers in lexicographic order.
    pub fn shell_names(&self) -> Vec<String> {
        self.shells.keys().cloned().collect()
    }
}
