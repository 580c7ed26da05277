use crate::error::SanitizeError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Output format of the command-line tool
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sanitized recipe as JSON (default)
    #[default]
    Json,
    /// Escaped HTML fragment
    Html,
}

/// Settings for the command-line tool
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SanitizeConfig {
    /// Output format when none is given on the command line
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
    /// Default log filter, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SanitizeConfig {
    /// Load configuration from file and environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, SanitizeError> {
        Ok(load_config(path)?)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_SANITIZE__ prefix
/// 2. The file at `path`, or recipe-sanitize.toml in the current directory
/// 3. Default values
///
/// An explicit `path` must exist; the default file is optional.
///
/// Environment variable format: RECIPE_SANITIZE__FORMAT=html
pub fn load_config(path: Option<&Path>) -> Result<SanitizeConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-sanitize").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested keys
        .add_source(
            Environment::with_prefix("RECIPE_SANITIZE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
