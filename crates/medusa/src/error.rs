//! Error types for the Medusa client.

/// Errors that can occur when calling the store API.
///
/// These are distinct from [`ApiError`](crate::ApiError): an `Error` means
/// the call itself failed (transport or decoding), while an `ApiError`
/// means the API answered and reported a problem.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed before a response could be classified.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A response body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
