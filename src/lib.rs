//! i3-quickterm: a drop-down terminal for i3 and sway.
//!
//! Toggles a terminal running one of the configured shells on the focused
//! workspace, creating it on first use and moving it over from other
//! workspaces or the scratchpad afterwards.

pub mod app;
pub mod cli;
pub mod debug;
pub mod error;
pub mod history;
pub mod launch;
pub mod picker;
pub mod toggle;
pub mod wm;

pub use error::{QuicktermError, Result};
pub use toggle::{Outcome, Request};
