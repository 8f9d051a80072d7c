use std::fmt;

/// What went wrong in a poll cycle. One variant per failure the loop can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The status endpoint could not be reached.
    Network,
    /// The status endpoint answered with a non-success HTTP status.
    Endpoint(u16),
    /// The response body was not JSON.
    Format,
    /// The service rejected the request and answered with a `code`.
    Service { code: String },
    /// The payload or record lacked a required field.
    Content,
    /// A value had the wrong JSON type.
    DataType,
    /// No homework changed since the cursor. Benign.
    EmptyList,
    /// The record carried a status missing from the verdict table.
    UnknownStatus { status: String },
    /// The notifier failed to deliver a message.
    Notification,
}

impl ErrorKind {
    /// Whether this outcome means "nothing new" rather than a failure.
    pub fn is_benign(&self) -> bool {
        matches!(self, ErrorKind::EmptyList)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Endpoint(code) => write!(f, "http status {code}"),
            ErrorKind::Format => write!(f, "response is not json"),
            ErrorKind::Service { .. } => write!(f, "service rejected the request"),
            ErrorKind::Content => write!(f, "unexpected response content"),
            ErrorKind::DataType => write!(f, "unexpected data type"),
            ErrorKind::EmptyList => write!(f, "homework list is empty"),
            ErrorKind::UnknownStatus { .. } => write!(f, "unknown homework status"),
            ErrorKind::Notification => write!(f, "notification delivery failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct PollError {
    pub kind: ErrorKind,
    pub message: String,
}

impl PollError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
