use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Registry error: {0}")]
    Dom(#[from] dom::DomError),
}

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
