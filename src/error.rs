use thiserror::Error;

/// Error types for lookup requests.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Unrecognized serialization format token.
    ///
    /// Raised synchronously by [`crate::LookupRequest::set_format`]; the
    /// previously stored format is left unchanged.
    #[error("invalid format {value:?}: must be one of xml, json, text")]
    InvalidFormat {
        /// The rejected token.
        value: String,
    },

    /// Network or protocol failure while executing the request.
    ///
    /// HTTP 4xx/5xx responses are not transport errors; their bodies are
    /// returned to the caller as-is.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
