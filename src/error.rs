use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// A record could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// LOG_LEVEL is not one of off/error/warn/info/debug/trace
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
