use thiserror::Error;

/// Failure to turn one raw record block into a `Passport`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid field syntax: {0:?} (expected name:value)")]
    InvalidFieldSyntax(String),
    #[error("Unknown field: {0:?}")]
    UnknownField(String),
}

#[derive(Error, Debug)]
pub enum PassportError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
