use thiserror::Error;

/// Errors raised while reading or writing pile configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown layout parameter `{0}`")]
    UnknownParam(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("malformed config snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config i/o: {0}")]
    Io(#[from] std::io::Error),
}
