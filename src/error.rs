//! Client Errors
//!
//! Failures of the store client. They are logged where they happen and
//! never reach the components.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {base:?}: {reason}")]
    InvalidBaseUrl { base: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a body that did not decode
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
