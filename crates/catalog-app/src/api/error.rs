/// Errors from the catalog REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No bearer token was available; the request was never sent.
    #[error("No bearer credential available")]
    MissingCredential,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A success response whose body was not JSON.
    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
