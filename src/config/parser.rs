//! Configuration file parsing (HOCON format).

use std::path::Path;

use hocon::HoconLoader;

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Load configuration from a HOCON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    HoconLoader::new()
        .load_file(path)
        .map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
        })?
        .resolve()
        .map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
}

/// Load configuration from a HOCON string.
pub fn load_config_str(content: &str) -> Result<Config, ConfigError> {
    HoconLoader::new()
        .load_str(content)
        .map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?
        .resolve()
        .map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = load_config_str(
            r##"
            api { host = "getbible.net" }
            translation {
                default = "kjv"
                channels = [
                    { channel = "#deutsch", default = "luther1912" }
                ]
            }
            "##,
        )
        .unwrap();

        assert_eq!(config.api_host(), "getbible.net");
        assert_eq!(config.translation.default, "kjv");
        assert_eq!(config.default_translation("#deutsch"), "luther1912");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = load_config_str(r#"translation { default = "web" }"#).unwrap();
        assert_eq!(config.api_host(), "getbible.net");
        assert_eq!(config.default_translation("anywhere"), "web");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config("/nonexistent/versicle.conf");
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
