// ── Core error types ──
//
// User-facing errors from staffdir-core. Consumers never see raw HTTP
// or JSON failures: every remote failure is tagged with the store
// operation that issued it and rendered as "Unable to {operation}".

use strum::Display;
use thiserror::Error;

use crate::model::EmployeeId;

/// The store operation a remote call belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RemoteOperation {
    #[strum(to_string = "fetch employees")]
    Fetch,
    #[strum(to_string = "save employee")]
    Create,
    #[strum(to_string = "update employee")]
    Update,
    #[strum(to_string = "delete employee")]
    Delete,
}

/// Coarse classification of a remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteFailure {
    /// The server could not be reached.
    Connect,
    /// The request exceeded the configured timeout.
    Timeout,
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The server answered 2xx with a body we could not decode.
    InvalidResponse,
    Other,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Validation errors (raised before any remote call) ────────────
    #[error("Employee data is required")]
    MissingRecord,

    #[error("Invalid index {index}: the list holds {len} employees")]
    InvalidIndex { index: usize, len: usize },

    #[error("Employee ID is required")]
    MissingId,

    #[error("Invalid employee ID '{value}'")]
    InvalidId { value: String },

    #[error("Employee at index {index} does not have ID {id}")]
    IdMismatch { index: usize, id: EmployeeId },

    #[error("Employee {id} is not in the local list")]
    UnknownId { id: EmployeeId },

    // ── Remote errors ────────────────────────────────────────────────
    #[error("Unable to {operation}: {message}")]
    Remote {
        operation: RemoteOperation,
        failure: RemoteFailure,
        message: String,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Wrap a transport-layer error raised while performing `operation`.
    pub fn remote(operation: RemoteOperation, err: staffdir_api::Error) -> Self {
        let failure = classify(&err);
        let message = match &err {
            staffdir_api::Error::Api { status, message } => format!("HTTP {status}: {message}"),
            other => other.to_string(),
        };
        Self::Remote {
            operation,
            failure,
            message,
        }
    }

    /// Returns `true` for caller-input errors detected before any I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRecord
                | Self::InvalidIndex { .. }
                | Self::MissingId
                | Self::InvalidId { .. }
                | Self::IdMismatch { .. }
                | Self::UnknownId { .. }
        )
    }

    /// The remote failure class, if this error came from the server side.
    pub fn remote_failure(&self) -> Option<RemoteFailure> {
        match self {
            Self::Remote { failure, .. } => Some(*failure),
            _ => None,
        }
    }

    /// Returns `true` if the server reported the resource missing.
    pub fn is_not_found(&self) -> bool {
        self.remote_failure() == Some(RemoteFailure::Status(404))
    }
}

fn classify(err: &staffdir_api::Error) -> RemoteFailure {
    match err {
        staffdir_api::Error::Transport(e) if e.is_timeout() => RemoteFailure::Timeout,
        staffdir_api::Error::Transport(e) if e.is_connect() => RemoteFailure::Connect,
        staffdir_api::Error::Api { status, .. } => RemoteFailure::Status(*status),
        staffdir_api::Error::Deserialization { .. } => RemoteFailure::InvalidResponse,
        staffdir_api::Error::Transport(e) if e.is_decode() => RemoteFailure::InvalidResponse,
        _ => RemoteFailure::Other,
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

/// Errors raised outside any store operation (client construction).
impl From<staffdir_api::Error> for CoreError {
    fn from(err: staffdir_api::Error) -> Self {
        CoreError::Config {
            message: err.to_string(),
        }
    }
}
