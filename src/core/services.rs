/*!
Host collaborators consumed by the dispatch engine.

These traits stand in for the hosting workbench: context snapshots, the
shared pre-step handler, command resolution, error reporting and
operation listeners. Implementations needing mutation use interior
mutability; every method takes `&self`.
*/

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::constants::LOG_TARGET;
use crate::core::dispatch::ActivationReport;
use crate::core::error::{Error, ServiceError};

/// Opaque snapshot of UI/execution state handed to the pre-step and to commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationContext {
    variables: BTreeMap<String, String>,
}

impl EvaluationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Look up a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Supplies evaluation context snapshots
pub trait HandlerService {
    /// Snapshot the current UI/execution state
    fn create_context_snapshot(&self) -> EvaluationContext;
}

/// Handler service that always returns an empty context
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContextService;

impl HandlerService for EmptyContextService {
    fn create_context_snapshot(&self) -> EvaluationContext {
        EvaluationContext::default()
    }
}

/// Shared handler run before every invocation
pub trait PreStepHandler {
    fn execute(&self, context: &EvaluationContext) -> Result<(), ServiceError>;
}

impl<F> PreStepHandler for F
where
    F: Fn(&EvaluationContext) -> Result<(), ServiceError>,
{
    fn execute(&self, context: &EvaluationContext) -> Result<(), ServiceError> {
        self(context)
    }
}

/// A resolved command
pub trait CommandHandle {
    /// Command identifier
    fn id(&self) -> &str;

    /// Execute after the host's enablement checks
    fn execute_with_checks(&self, context: &EvaluationContext) -> Result<(), ServiceError>;
}

/// Resolves command identifiers
pub trait CommandService {
    fn resolve_command(&self, id: &str) -> Option<Arc<dyn CommandHandle>>;
}

/// Diagnostic sink for failures that must not reach the UI
pub trait ErrorSink {
    fn log_error(&self, source: &str, error: &Error);
}

/// Error sink writing through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn log_error(&self, source: &str, error: &Error) {
        log::error!(target: LOG_TARGET, "[{}] {}: {}", source, error.kind(), error);
    }
}

/// Notified after every activation reaches a terminal state
pub trait OperationListener {
    fn operation_performed(&self, report: &ActivationReport);
}
