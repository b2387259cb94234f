//! Domain errors for Supaseed.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while building the admin client or calling the admin API
#[derive(Error, Debug)]
pub enum AdminApiError {
    /// `SUPABASE_URL` was not provided
    #[error("supabase_url is required")]
    MissingUrl,

    /// `SUPABASE_SERVICE_ROLE_KEY` was not provided
    #[error("supabase_key is required")]
    MissingServiceKey,

    /// Endpoint is not an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Service key cannot be sent as a header value
    #[error("Invalid service role key: {0}")]
    InvalidServiceKey(String),

    /// Malformed request (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rejected credentials (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Key lacks admin rights (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Endpoint not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// An account with this email already exists (HTTP 422, `email_exists`)
    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    /// Payload rejected by validation (HTTP 422)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Too many requests (HTTP 429)
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Server-side failure (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Any other non-success status
    #[error("Unexpected response ({0}): {1}")]
    Unexpected(StatusCode, String),

    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success response that could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AdminApiError {
    /// True for errors raised before any request was sent
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingUrl
                | Self::MissingServiceKey
                | Self::InvalidUrl(_)
                | Self::InvalidServiceKey(_)
        )
    }

    /// True when the platform answered with an error status
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_)
                | Self::Unauthorized(_)
                | Self::Forbidden(_)
                | Self::NotFound(_)
                | Self::UserAlreadyExists(_)
                | Self::Validation(_)
                | Self::RateLimited(_)
                | Self::ServerError(_, _)
                | Self::Unexpected(_, _)
        )
    }
}
