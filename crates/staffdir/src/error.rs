//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use staffdir_core::{CoreError, RemoteFailure};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const VALIDATION: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the directory service")]
    #[diagnostic(
        code(staffdir::connection_failed),
        help(
            "Check that the service is running and the URL is right.\n\
             {message}\n\
             Try: staffdir --api-url <URL> list"
        )
    )]
    ConnectionFailed { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(staffdir::timeout),
        help("{message}\nIncrease the timeout with --timeout, or pass --timeout 0 to wait indefinitely.")
    )]
    Timeout { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Employee '{identifier}' not found")]
    #[diagnostic(
        code(staffdir::not_found),
        help("Run: staffdir list")
    )]
    NotFound { identifier: String },

    #[error("{message}")]
    #[diagnostic(code(staffdir::api_error))]
    Api { message: String, status: Option<u16> },

    // ── Input ────────────────────────────────────────────────────────

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(staffdir::validation))]
    Validation { field: String, reason: String },

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(staffdir::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(staffdir::config_exists),
        help("Pass --force to overwrite it, or edit the file directly.")
    )]
    ConfigExists { path: String },

    #[error("{message}")]
    #[diagnostic(
        code(staffdir::setup),
        help("Check the TLS settings (ca_cert, --insecure) in your config.")
    )]
    Setup { message: String },

    #[error(transparent)]
    #[diagnostic(code(staffdir::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(staffdir::serialization))]
    Serialization { message: String },
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. }
            | Self::Api {
                status: Some(404), ..
            } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::VALIDATION,
            Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let text = err.to_string();
        match err {
            CoreError::MissingRecord => CliError::Validation {
                field: "employee".into(),
                reason: "at least one of --first-name, --last-name, --email or --profession is required"
                    .into(),
            },

            CoreError::InvalidIndex { .. } => CliError::Validation {
                field: "index".into(),
                reason: text,
            },

            CoreError::MissingId | CoreError::InvalidId { .. } | CoreError::IdMismatch { .. } => {
                CliError::Validation {
                    field: "id".into(),
                    reason: text,
                }
            }

            CoreError::UnknownId { id } => CliError::NotFound {
                identifier: id.to_string(),
            },

            CoreError::Remote { failure, .. } => match failure {
                RemoteFailure::Connect => CliError::ConnectionFailed { message: text },
                RemoteFailure::Timeout => CliError::Timeout { message: text },
                RemoteFailure::Status(status) => CliError::Api {
                    message: text,
                    status: Some(status),
                },
                RemoteFailure::InvalidResponse | RemoteFailure::Other => CliError::Api {
                    message: text,
                    status: None,
                },
            },

            CoreError::Config { message } => CliError::Setup { message },
        }
    }
}
