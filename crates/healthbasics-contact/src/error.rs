//! Contact transport error types.

use thiserror::Error;

/// Why a contact form could not be delivered.
///
/// Callers of `ContactSubmitter` only ever see `LocalFallback`; these
/// variants exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum ContactError {
    /// The configured endpoint is not a usable URL.
    #[error("invalid contact endpoint: {0}")]
    InvalidEndpoint(String),

    /// The endpoint answered with a non-success status.
    #[error("contact endpoint rejected submission (HTTP {status})")]
    Rejected { status: u16 },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl ContactError {
    /// Returns `true` if the failure came from the server rather than the connection.
    pub fn is_server_side(&self) -> bool {
        matches!(self, ContactError::Rejected { status } if *status >= 500)
    }
}
