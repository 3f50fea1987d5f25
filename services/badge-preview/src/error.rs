//! Error types for the badge preview service

/// Errors that can occur in the badge preview service
#[derive(Debug, thiserror::Error)]
pub enum BadgePreviewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for badge preview operations
pub type Result<T> = std::result::Result<T, BadgePreviewError>;
