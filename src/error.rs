use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown configuration key: {0}")]
    KeyNotFound(String),
    #[error("Base URL must not end with '/': {0}")]
    TrailingSlash(String),
    #[error("Endpoint path must start with '/': {0}")]
    InvalidPath(String),
}
