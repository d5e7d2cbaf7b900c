//! Configuration type definitions.

use serde::Deserialize;

use crate::fetch::DEFAULT_API_HOST;

/// Built-in fallback translation code.
pub const DEFAULT_TRANSLATION: &str = "kjv";

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: Option<ApiConfig>,
    pub translation: TranslationConfig,
}

/// Verse API endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: Option<String>,
}

/// Default-translation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// Translation code used when a citation names none.
    pub default: String,
    /// Per-channel overrides of the default.
    pub channels: Option<Vec<ChannelDefault>>,
}

/// Maps a channel to its default translation code.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelDefault {
    pub channel: String,
    pub default: String,
}

impl Config {
    /// Configuration used when no config file is present.
    pub fn builtin_defaults() -> Self {
        Self {
            api: None,
            translation: TranslationConfig {
                default: DEFAULT_TRANSLATION.to_string(),
                channels: None,
            },
        }
    }

    /// Host of the verse API.
    pub fn api_host(&self) -> &str {
        self.api
            .as_ref()
            .and_then(|api| api.host.as_deref())
            .unwrap_or(DEFAULT_API_HOST)
    }

    /// Default translation code for a channel, falling back to the global
    /// default when the channel has no override.
    pub fn default_translation(&self, channel: &str) -> &str {
        self.translation
            .channels
            .iter()
            .flatten()
            .find(|entry| entry.channel == channel)
            .map(|entry| entry.default.as_str())
            .unwrap_or(&self.translation.default)
    }
}
