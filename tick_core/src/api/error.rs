use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We encountered a transport-level HTTP error, or couldn't parse a
    /// response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a 401. The bootstrap turns this into the login
    /// flow; mutations treat it like any other failure.
    #[error("not logged in")]
    Unauthorized,

    /// The server returned some other non-success status.
    #[error("unexpected status: {0}")]
    Unexpected(reqwest::StatusCode),
}
