use std::path::PathBuf;

/// All errors that can occur while fetching, extracting, or persisting player ratings.
#[derive(thiserror::Error, Debug)]
pub enum RatingsError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The render proxy returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}: {snippet}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
        snippet: String,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The document was fetched but nothing usable could be extracted from it.
    #[error("no player data found in document from {url}")]
    EmptyDocument { url: String },

    /// A required credential is not set.
    #[error("missing required credential: {var}")]
    MissingCredential { var: &'static str },

    /// Reading or writing a file failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A record could not be encoded or decoded as JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RatingsError {
    /// Whether the failure only affects the current candidate URL.
    ///
    /// Fetch failures and empty documents let a search move on to the next
    /// candidate; configuration and persistence failures do not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RatingsError::Http { .. }
                | RatingsError::UnexpectedStatus { .. }
                | RatingsError::ResponseBody { .. }
                | RatingsError::EmptyDocument { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RatingsError>;
