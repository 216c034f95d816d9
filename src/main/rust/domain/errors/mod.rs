use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpointUrl(String),

    #[error("Missing API key: the authorization header cannot be empty")]
    MissingApiKey,

    #[error("Transport failed: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
