use thiserror::Error;

/// Errors that can occur around sanitization: reading input, finding the
/// recipe node, loading configuration.
///
/// The field normalizers themselves never fail.
#[derive(Error, Debug)]
pub enum SanitizeError {
    /// Input was not valid JSON
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// No Recipe node in the JSON-LD document
    #[error("No recipe found in the JSON-LD document")]
    NoRecipe,

    /// Failed to read input
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
