//! Configuration validation.

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Validate a loaded configuration.
///
/// The default translation code itself is trusted as-is rather than checked
/// against the catalog; the upstream API is the authority on which codes it
/// serves.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.translation.default.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "translation.default must not be empty".to_string(),
        });
    }

    if let Some(host) = config.api.as_ref().and_then(|api| api.host.as_deref()) {
        if host.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.host must not be empty when set".to_string(),
            });
        }
    }

    let mut seen = std::collections::HashSet::new();
    for entry in config.translation.channels.iter().flatten() {
        if entry.channel.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "channel override with empty channel name".to_string(),
            });
        }
        if entry.default.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!("channel '{}' has an empty default translation", entry.channel),
            });
        }
        if !seen.insert(entry.channel.clone()) {
            return Err(ConfigError::ValidationError {
                message: format!("duplicate channel override for '{}'", entry.channel),
            });
        }
    }

    Ok(())
}
