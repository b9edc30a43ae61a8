//! Default values for every config key.
//!
//! These are what a user gets with no config file at all, and what any key
//! missing from the file falls back to.

use std::collections::BTreeMap;

pub fn menu() -> String {
    "rofi -dmenu -p 'quickterm: ' -no-custom -auto-select".to_string()
}

pub fn term() -> String {
    "auto".to_string()
}

pub fn history() -> Option<String> {
    Some("{$HOME}/.cache/i3-quickterm/shells.order".to_string())
}

pub fn ratio() -> f64 {
    0.25
}

pub fn shells() -> BTreeMap<String, String> {
    [
        ("js", "node"),
        ("python", "ipython3 --no-banner"),
        ("shell", "{$SHELL}"),
    ]
    .into_iter()
    .map(|(name, cmd)| (name.to_string(), cmd.to_string()))
    .collect()
}
