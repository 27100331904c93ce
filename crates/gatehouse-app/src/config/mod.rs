//! Configuration file parsing for Gatehouse
//!
//! Supports:
//! - `.gatehouse/config.toml` - Page metadata, asset references, UI and auth settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, parse_settings};
pub use types::*;
