/*!
Error handling for the algorithm menu.

Errors raised by host collaborators are carried as [`ServiceError`]; the
crate-level [`Error`] records where in menu composition or dispatch a
failure happened. None of these reach the UI caller of an activation:
the dispatch engine converts them into error-sink records.
*/

use std::fmt;

use thiserror::Error;

/// Result type for menu composition and dispatch
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by a [`ServiceError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for menu composition and dispatch
#[derive(Error, Debug)]
pub enum Error {
    /// Entry carries neither a command identifier nor a legacy action
    #[error("Algorithm entry '{entry}' has no invocation mechanism")]
    MissingInvocationMechanism {
        entry: String,
    },

    /// The shared pre-step handler failed; the activation was aborted
    #[error("Pre-step handler failed: {0}")]
    PreStepFailure(#[source] ServiceError),

    /// Running the action or executing the command failed
    #[error("Invocation of '{label}' failed: {source}")]
    MechanismInvocationFailure {
        label: String,
        #[source]
        source: ServiceError,
    },

    /// The command service does not know the command identifier
    #[error("Unknown command: {0}")]
    CommandNotFound(String),

    /// Registry error
    #[error("Registry error: {0}")]
    Registry(String),

    /// Dispatch state machine received an out-of-order transition
    #[error("Dispatch not in correct state: expected {expected}, but was {actual}")]
    InvalidState {
        expected: String,
        actual: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Short name of the error kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingInvocationMechanism { .. } => "MissingInvocationMechanism",
            Error::PreStepFailure(_) => "PreStepFailure",
            Error::MechanismInvocationFailure { .. } => "MechanismInvocationFailure",
            Error::CommandNotFound(_) => "CommandNotFound",
            Error::Registry(_) => "Registry",
            Error::InvalidState { .. } => "InvalidState",
            Error::Config(_) => "Config",
        }
    }
}

/// Error raised by a host collaborator (pre-step, action, command)
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ServiceError {
    /// Create an error with a message only
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error context for adding more information to errors
#[derive(Debug)]
pub struct ErrorContext {
    /// The error that occurred
    pub error: Error,
    /// Additional context about the error
    pub context: String,
    /// File where the error occurred
    pub file: &'static str,
    /// Line where the error occurred
    pub line: u32,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {}:{}) - {}", self.error, self.file, self.line, self.context)
    }
}

impl std::error::Error for ErrorContext {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Attach context and the call site to an error
#[macro_export]
macro_rules! with_context {
    ($error:expr, $context:expr) => {
        $crate::error::ErrorContext {
            error: $error,
            context: $context.to_string(),
            file: file!(),
            line: line!(),
        }
    };
}

/// Create a registry error
#[macro_export]
macro_rules! registry_err {
    ($msg:expr) => {
        Err($crate::error::Error::Registry($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::error::Error::Registry(format!($fmt, $($arg)*)))
    };
}

/// Create a configuration error
#[macro_export]
macro_rules! config_err {
    ($msg:expr) => {
        Err($crate::error::Error::Config($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::error::Error::Config(format!($fmt, $($arg)*)))
    };
}

/// Create an invalid state error
#[macro_export]
macro_rules! invalid_state_err {
    ($expected:expr, $actual:expr) => {
        Err($crate::error::Error::InvalidState {
            expected: $expected.to_string(),
            actual: $actual.to_string(),
        })
    };
}
