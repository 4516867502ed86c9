use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("Invalid room threshold: {0:?}")]
    InvalidThreshold(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Listing can only be submitted from the photos step")]
    NotOnFinalStep,

    #[error("Listing already submitted")]
    AlreadySubmitted,
}

pub type Result<T> = std::result::Result<T, Error>;
