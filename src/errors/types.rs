use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostscopeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found")]
    NotFound,

    #[error("Access denied")]
    AccessDenied,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glob error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Internal error: {0}")]
    Internal(String),
}
