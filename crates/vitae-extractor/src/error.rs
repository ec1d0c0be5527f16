//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while setting up extraction
///
/// Parsing itself never fails; these only arise from configuration.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be read or written as TOML
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}
