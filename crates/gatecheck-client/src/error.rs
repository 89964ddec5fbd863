//! Error types for the authorization client.

/// Authorization client errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// The service answered with an internal error (HTTP 500).
    ///
    /// Carries the raw response so callers can inspect what the service
    /// reported.
    #[error("authorization service error: HTTP {status}: {body}")]
    Service {
        status: u16,
        body: String,
        headers: Vec<(String, String)>,
    },

    /// Network-level failure: connect, DNS, timeout, or body read.
    ///
    /// `Ok(false)` always means the service (or local validation) denied
    /// the request; a transport failure never resolves to a decision.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Configuration error (unparseable base URL, client construction).
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl AuthzError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Service { .. } => 3,
            Self::Transport { .. } => 5,
        }
    }

    /// HTTP status of the service response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthzError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

/// Result type for authorization operations.
pub type AuthzResult<T> = Result<T, AuthzError>;
