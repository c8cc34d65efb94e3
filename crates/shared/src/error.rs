//! Error types for Atrium

use thiserror::Error;

/// Error reported by the session collaborator when sign-out is rejected
/// by the transport or the server
#[derive(Debug, Clone, Error)]
#[error("sign-out failed: {message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    /// Create an auth error with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error raised while building or loading a navigation catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate tab id '{0}' in navigation catalog")]
    DuplicateTab(String),

    #[error("unsupported catalog file extension: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// General Atrium error type
#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PanelError>;
