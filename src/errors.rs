use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtmosphereError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Domain error: {0}")]
    DomainError(String),
}
