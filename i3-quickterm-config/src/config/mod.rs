//! Launcher configuration.
//!
//! - [`config_struct`]: [`Config`], [`ConfigOverrides`] and the merge rules
//! - [`persistence`]: config file discovery and loading

pub mod config_struct;
pub mod persistence;

pub use config_struct::{Config, ConfigOverrides};
pub use persistence::CONFIG_LOCATIONS;
