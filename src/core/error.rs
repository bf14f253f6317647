use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Documents that merely lack their feed marker key (failed polls archived
/// alongside good ones) are not errors: the normalizers skip them silently.
/// Likewise an empty normalized table is a valid outcome, not a failure.
#[derive(Debug, Error)]
pub enum AvError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A response body could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document store could not be read or written.
    ///
    /// Fatal to the run: no partial table is produced.
    #[error("Document store error: {0}")]
    Store(#[from] std::io::Error),

    /// A document carried its feed marker key but violated the feed schema:
    /// a required field was absent or a numeric string failed to parse.
    ///
    /// This aborts normalization of the affected table; `detail` names the
    /// offending record.
    #[error("Schema violation in {table} table: {detail}")]
    Schema {
        /// Which normalized table was being built (`"news"` or `"intraday"`).
        table: &'static str,
        /// Diagnostic identifying the offending record and field.
        detail: String,
    },
}

impl AvError {
    pub(crate) fn schema(table: &'static str, detail: impl Into<String>) -> Self {
        AvError::Schema {
            table,
            detail: detail.into(),
        }
    }
}
