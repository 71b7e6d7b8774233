use thiserror::Error;
use url::Url;

use crate::classify::CardAssets;
use crate::constants::{DEFAULT_LINK_ICON_URL, DEFAULT_PLATFORM_ORIGIN};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as URL")]
    ParseUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Links
    pub platform_origin: String,

    // Assets
    pub link_icon_url: String,
    pub stylesheet_url: Option<String>,

    // Document
    pub page_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform_origin: DEFAULT_PLATFORM_ORIGIN.to_string(),
            link_icon_url: DEFAULT_LINK_ICON_URL.to_string(),
            stylesheet_url: None,
            page_title: "Posts".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Links
            platform_origin: parse_origin(&env_or_default(
                "PLATFORM_ORIGIN",
                DEFAULT_PLATFORM_ORIGIN,
            ))?,

            // Assets
            link_icon_url: env_or_default("LINK_ICON_URL", DEFAULT_LINK_ICON_URL),
            stylesheet_url: optional_env("STYLESHEET_URL"),

            // Document
            page_title: env_or_default("PAGE_TITLE", "Posts"),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_origin(&self.platform_origin)?;
        if self.link_icon_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "LINK_ICON_URL".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Assets handed to the content classifier.
    #[must_use]
    pub fn card_assets(&self) -> CardAssets {
        CardAssets::new(self.link_icon_url.clone())
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Check that `value` is an absolute http(s) origin and strip any trailing slash.
fn parse_origin(value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::ParseUrl {
        name: "PLATFORM_ORIGIN".to_string(),
        source: e,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            name: "PLATFORM_ORIGIN".to_string(),
            message: format!("must be an http(s) URL, got '{value}'"),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}
