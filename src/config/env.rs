//! Environment-driven settings.

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "versicle.conf";

/// Resolve the configuration file path, honoring `VERSICLE_CONFIG`.
pub fn get_config_path() -> String {
    std::env::var("VERSICLE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
