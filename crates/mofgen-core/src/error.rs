//! Error types for mofgen

use thiserror::Error;

/// Result type alias for fallible mofgen operations
pub type MofgenResult<T> = Result<T, MofgenError>;

/// Errors at the edges of generation: loading models and configuration.
///
/// Generation itself never fails; problems found there are reported as
/// [`crate::Diagnostic`]s instead.
#[derive(Error, Debug)]
pub enum MofgenError {
    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The interface model could not be parsed
    #[error("invalid interface model: {0}")]
    Model(#[from] serde_json::Error),

    /// The configuration file could not be parsed
    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value
    #[error("configuration error: {0}")]
    Config(String),
}
