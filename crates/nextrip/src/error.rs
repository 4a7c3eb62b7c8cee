//! Error types shared across the crate.

#[derive(Debug, thiserror::Error)]
pub enum NexTripError {
    #[error("invalid route number {input:?}: expected an integer between 2 and 852")]
    InvalidRoute { input: String },

    #[error("API error: HTTP {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid vehicle data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, NexTripError>;
