// ABOUTME: Error type for single API calls, SNAFU pattern.
// ABOUTME: Distinguishes transport failures, rejected status codes, and undecodable bodies.

use snafu::Snafu;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    /// The call never produced a response (DNS, connect, TLS, timeout).
    #[snafu(display("{operation} could not reach {url}: {source}"))]
    Transport {
        operation: &'static str,
        url: String,
        source: BoxError,
    },

    /// The server answered outside the 2xx range.
    #[snafu(display("{operation} failed with status {status}: {body}"))]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The configured base URL can't be used to build requests.
    #[snafu(display("invalid API url {url}: {reason}"))]
    InvalidUrl { url: String, reason: String },

    /// The server answered 2xx but the body was not what we expected.
    #[snafu(display("{operation} returned an unreadable body: {source}"))]
    Decode {
        operation: &'static str,
        source: serde_json::Error,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Transport,
    Status,
    Decode,
    InvalidUrl,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Transport { .. } => ApiErrorKind::Transport,
            ApiError::Status { .. } => ApiErrorKind::Status,
            ApiError::Decode { .. } => ApiErrorKind::Decode,
            ApiError::InvalidUrl { .. } => ApiErrorKind::InvalidUrl,
        }
    }

    /// Status code of a rejected call.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Which primitive failed.
    pub fn operation(&self) -> &'static str {
        match self {
            ApiError::Transport { operation, .. }
            | ApiError::Status { operation, .. }
            | ApiError::Decode { operation, .. } => operation,
            ApiError::InvalidUrl { .. } => "buildClient",
        }
    }
}
