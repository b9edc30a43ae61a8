//! Small value types shared by the config and the launcher.

use serde::{Deserialize, Serialize};

/// Edge of the workspace the terminal is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}
