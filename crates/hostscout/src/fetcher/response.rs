//! Fetch result type and constructors.

use reqwest::StatusCode;
use serde::Serialize;

/// Error text used when a failed response carries no reason phrase
pub const UNKNOWN_ERROR: &str = "Unknown Error Occurred";

/// Outcome of asking one host for its peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FetchResult {
    /// The host answered with a peer list
    Success { host: String, peers: Vec<String> },

    /// The host could not be reached or rejected the request
    Failure {
        host: String,
        error: String,
        /// Response body, when the host answered at all
        text: Option<String>,
        /// HTTP status, when the host answered at all
        status: Option<u16>,
    },
}

impl FetchResult {
    /// Build a successful result
    pub fn success(host: impl Into<String>, peers: Vec<String>) -> Self {
        Self::Success { host: host.into(), peers }
    }

    /// Build a result for a transport-level fault (connect, DNS, timeout, decode)
    pub fn fault(host: impl Into<String>, error: impl ToString) -> Self {
        Self::Failure { host: host.into(), error: error.to_string(), text: None, status: None }
    }

    /// Build a result for a response whose status did not pass the check
    pub fn rejected(host: impl Into<String>, status: StatusCode, text: String) -> Self {
        let error = status.canonical_reason().unwrap_or(UNKNOWN_ERROR).to_string();

        Self::Failure { host: host.into(), error, text: Some(text), status: Some(status.as_u16()) }
    }

    /// The host this result belongs to
    pub fn host(&self) -> &str {
        match self {
            Self::Success { host, .. } | Self::Failure { host, .. } => host,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}
