//! Configuration file parsing for archview
//!
//! Settings live in `<config_dir>/archview/config.toml` unless a path is
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from};
pub use types::*;
