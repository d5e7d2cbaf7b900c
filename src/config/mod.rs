//! Configuration parsing and types.

pub mod env;
pub mod parser;
pub mod types;
pub mod validate;

pub use parser::{load_config, load_config_str};
pub use types::*;
pub use validate::validate_config;

use crate::common::error::ConfigError;

/// Load a configuration file and validate it.
pub fn load_and_validate(path: &str) -> Result<types::Config, ConfigError> {
    let config = load_config(path)?;
    validate_config(&config)?;
    Ok(config)
}
