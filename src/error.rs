//! Error types for the CoinGecko client library.

use thiserror::Error;

/// The main error type for all CoinGecko client operations.
#[derive(Error, Debug)]
pub enum CoinGeckoError {
    /// The HTTP exchange failed before a response was received
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest_middleware::Error),

    /// The transport gave up waiting for the response
    #[error("Request timed out")]
    Timeout,

    /// The caller's cancellation token fired before the response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// CoinGecko answered with a non-success status
    #[error("CoinGecko API error: {0}")]
    Api(ApiError),

    /// The response body did not match the expected schema
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required request parameter was missing
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The single-price lookup found no price for the pair
    #[error("No price for {id} in {vs_currency}")]
    NotFound {
        /// Coin identifier that was looked up
        id: String,
        /// Target currency that was looked up
        vs_currency: String,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query string encoding error
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl CoinGeckoError {
    /// Shorthand for a [`CoinGeckoError::Validation`] error.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if the error came from the network layer (including timeouts).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }

    /// The API error detail, if CoinGecko rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for CoinGeckoError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => Self::Timeout,
            other => Self::Transport(other),
        }
    }
}

impl From<reqwest::Error> for CoinGeckoError {
    fn from(err: reqwest::Error) -> Self {
        reqwest_middleware::Error::Reqwest(err).into()
    }
}

/// A non-success HTTP response from CoinGecko.
///
/// `message` holds the raw response body, or a synthesized
/// `{"status": {"error_code": N}}` document when the body was empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Response body, or the synthesized status document
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ApiError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = if body.is_empty() {
            format!(r#"{{"status": {{"error_code": {status}}}}}"#)
        } else {
            String::from_utf8_lossy(body).into_owned()
        };
        Self { status, message }
    }

    /// Extract the human-readable message from a CoinGecko error body.
    ///
    /// CoinGecko uses either `{"error": "..."}` or
    /// `{"status": {"error_code": N, "error_message": "..."}}`.
    pub fn error_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.message).ok()?;
        value
            .get("error")
            .or_else(|| value.get("status").and_then(|s| s.get("error_message")))
            .and_then(|m| m.as_str())
            .map(str::to_owned)
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the API key was missing, invalid, or lacks access.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}
