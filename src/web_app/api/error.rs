// web_app/api/error.rs - Error taxonomy for backend operations

use thiserror::Error;

/// Failure of a backend operation, surfaced at the operation boundary.
///
/// None of these are fatal: `Auth` degrades to the unauthenticated
/// view and the rest are shown inline so the user can retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Bad credentials or a rejected token
    #[error("authentication failed")]
    Auth,
    /// Transport-level failure before any HTTP status was received
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status outside the auth cases
    #[error("request failed with status {0}")]
    Status(u16),
    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}
