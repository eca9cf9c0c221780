//! Configuration for the `gbs` tool
//!
//! Provides types and loading for the optional `gbs.toml` file.

pub mod loader;
pub mod schema;

pub use loader::{find_config, find_config_from, load_config, ConfigError, CONFIG_FILE_NAME};
pub use schema::*;
