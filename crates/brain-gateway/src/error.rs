//! Error types for the backend gateway.

/// Faults produced by a single backend call.
///
/// The gateway makes exactly one attempt per call; every failure mode is
/// reported through one of these variants and left to the caller to handle.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend answered with a non-success HTTP status.
    #[error("backend returned status {0}")]
    BadStatus(u16),
    /// The backend could not be reached (connect failure, timeout, or a
    /// transport error while reading the response).
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// The response body was not valid JSON.
    #[error("failed to decode backend response: {0}")]
    DecodeFailed(String),
}
