use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token expiration must be between 1 and {max} hours, got {hours}")]
    InvalidExpiration { hours: u32, max: u32 },
}
