use thiserror::Error;

/// Errors raised inside the frontend core.
///
/// None of these are fatal to the application: callers log them and fall
/// back to a default state.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Slide index {index} out of range for {len} slides")]
    SlideOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, PortalError>;
