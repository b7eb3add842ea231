use thiserror::Error;

/// Errors returned by the fuel-price feed client.
///
/// All of these are terminal for a pipeline run: no partial data is used
/// and the client never retries on its own.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network or TLS failure from the underlying HTTP client, including
    /// non-2xx statuses.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-OK `ResultadoConsulta`.
    #[error("feed reported result status {0:?}")]
    Api(String),

    /// The payload decoded as JSON but does not have the batch shape.
    #[error("malformed station batch: {reason}")]
    MalformedBatch { reason: String },

    /// The response body could not be parsed as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot be combined with the endpoint path.
    #[error("invalid feed base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
