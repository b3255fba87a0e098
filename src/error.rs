//! Common error type and result alias.
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure talking to the generation provider.
    #[error("http client error: {0}")]
    HttpClient(reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("provider error: {0}")]
    Provider(String),
    /// The provider answered successfully but the body is missing a field we need.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
