//! Application error types

use thiserror::Error;

/// Failure category of a resource request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// The request never produced a response (DNS, connect, reset).
    Transport,

    /// The server answered with a non-2xx status.
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// Anything else, including undecodable payloads.
    Unknown,
}

/// The single error type produced by the resource client.
///
/// The display form is the human-readable message only, so it can be
/// shown to a user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    kind: RequestErrorKind,
    message: String,
}

impl RequestError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: RequestErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::Transport, message)
    }

    /// Creates a server error for the given status.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::Server { status }, message)
    }

    /// Creates an unknown error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::Unknown, message)
    }

    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> RequestErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status for server errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.kind {
            RequestErrorKind::Server { status } => Some(status),
            _ => None,
        }
    }

    /// Returns true if the server reported that no record matched.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

/// Picks the message to surface for a failed request.
///
/// The structured server message wins over the transport message, which
/// wins over the fallback. Blank candidates are skipped.
#[must_use]
pub fn best_effort_message(
    server_message: Option<&str>,
    transport_message: Option<&str>,
    fallback: &str,
) -> String {
    [server_message, transport_message]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Result type alias for resource requests.
pub type RequestResult<T> = Result<T, RequestError>;
