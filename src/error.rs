//! error types
//!
//! structured errors for input validation, config, http, json, graphql
//! responses, and cancellation.

use crate::graphql::GraphQlError;
use std::fmt;

/// library result type
pub type Result<T> = std::result::Result<T, Error>;

/// error type for the client and its validators
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid segment: {segment}")]
    InvalidSegment {
        /// the rejected season segment
        segment: String,
    },

    #[error("invalid stat: {field}")]
    InvalidStat {
        /// the first rejected stat field
        field: String,
    },

    #[error("request cancelled")]
    Cancelled,

    #[error("config error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graphql error: {message}")]
    GraphQl {
        /// http status if available
        status: Option<u16>,
        /// graphql error list
        errors: Vec<GraphQlError>,
        /// raw response body
        body: String,
        /// top-level message
        message: String,
    },
}

/// coarse error category callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// season segment outside the whitelist
    InvalidSegment,
    /// stat field outside the whitelist
    InvalidStat,
    /// network, status, graphql, or decode failure
    Transport,
    /// aborted through the caller's cancellation token
    Cancelled,
    /// rejected client configuration
    Config,
}

impl Error {
    /// category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidSegment { .. } => ErrorKind::InvalidSegment,
            Error::InvalidStat { .. } => ErrorKind::InvalidStat,
            Error::Cancelled => ErrorKind::Cancelled,
            Error::Config(_) => ErrorKind::Config,
            Error::Http(_) | Error::Url(_) | Error::Json(_) | Error::GraphQl { .. } => {
                ErrorKind::Transport
            }
        }
    }

    /// true if the error was raised before any request was sent
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidSegment | ErrorKind::InvalidStat
        )
    }

    /// true if the error looks like an auth failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::GraphQl { status: Some(401 | 403), .. })
            || matches!(self, Error::Http(err) if err.status() == Some(reqwest::StatusCode::UNAUTHORIZED))
    }
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
