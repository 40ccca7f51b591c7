/*!
Dispatch engine.

Routes an activated leaf to its invocation mechanism. The shared pre-step
always runs first with a fresh context snapshot; a legacy action then runs
without context, while a command is resolved and executed with the same
snapshot the pre-step saw. Every failure is logged through the error sink
and never propagates to the caller. A panic in host code counts as a
failure of the step that raised it.
*/

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::core::constants::{DEFAULT_LOG_SOURCE, LOG_TARGET};
use crate::core::dispatch::state::{DispatchState, DispatchStateMachine};
use crate::core::error::{Error, Result, ServiceError};
use crate::core::invocation::{InvocationKind, InvocationRef};
use crate::core::services::{
    CommandService, ErrorSink, HandlerService, LogErrorSink, OperationListener, PreStepHandler,
};
use crate::with_context;

/// Run a host call, turning a panic into a [`ServiceError`]
fn guarded<T, F>(call: F) -> std::result::Result<T, ServiceError>
where
    F: FnOnce() -> std::result::Result<T, ServiceError>,
{
    panic::catch_unwind(AssertUnwindSafe(call))
        .unwrap_or_else(|payload| Err(ServiceError::new(panic_message(payload.as_ref()))))
}

fn invocation_failed(label: &str) -> impl FnOnce(ServiceError) -> Error {
    let label = label.to_string();
    move |source| Error::MechanismInvocationFailure { label, source }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload");
    format!("panicked: {}", detail)
}

/// Outcome of one activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationReport {
    /// Label of the activated leaf
    pub label: String,
    /// Mechanism used
    pub kind: InvocationKind,
    /// Terminal state
    pub state: DispatchState,
    /// States visited, starting with `Idle`
    pub trace: Vec<DispatchState>,
    /// Message of the logged failure, if any
    pub failure: Option<String>,
}

impl ActivationReport {
    pub fn is_completed(&self) -> bool {
        self.state == DispatchState::Completed
    }

    /// Whether the mechanism step was entered
    pub fn dispatched(&self) -> bool {
        self.trace.contains(&DispatchState::Dispatching)
    }
}

/// Executes activations against the host collaborators
pub struct DispatchEngine {
    handler_service: Arc<dyn HandlerService>,
    pre_step: Arc<dyn PreStepHandler>,
    command_service: Arc<dyn CommandService>,
    error_sink: Arc<dyn ErrorSink>,
    listeners: Vec<Arc<dyn OperationListener>>,
    log_source: String,
}

impl DispatchEngine {
    pub fn new(
        handler_service: Arc<dyn HandlerService>,
        pre_step: Arc<dyn PreStepHandler>,
        command_service: Arc<dyn CommandService>,
    ) -> Self {
        Self {
            handler_service,
            pre_step,
            command_service,
            error_sink: Arc::new(LogErrorSink),
            listeners: Vec::new(),
            log_source: DEFAULT_LOG_SOURCE.to_string(),
        }
    }

    /// Replace the error sink
    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.error_sink = sink;
        self
    }

    /// Set the source identifier passed to the error sink
    pub fn with_log_source(mut self, source: impl Into<String>) -> Self {
        self.log_source = source.into();
        self
    }

    /// Register an operation listener
    pub fn add_listener(&mut self, listener: Arc<dyn OperationListener>) {
        self.listeners.push(listener);
    }

    pub fn log_source(&self) -> &str {
        &self.log_source
    }

    /// Hand an error to the error sink
    pub fn report(&self, error: &Error) {
        self.error_sink.log_error(&self.log_source, error);
    }

    /// Run one activation to a terminal state.
    ///
    /// Never fails: errors from the pre-step or the mechanism are logged and
    /// reflected in the returned report.
    pub fn activate(&self, invocation: &InvocationRef) -> ActivationReport {
        let mut machine = DispatchStateMachine::new();
        log::debug!(target: LOG_TARGET, "activating '{}' ({})", invocation.label(), invocation.kind());

        let failure = match self.run(&mut machine, invocation) {
            Ok(()) => None,
            Err(error) => {
                if machine.can_fail() {
                    if let Err(state_error) = machine.fail() {
                        let context = format!("failing '{}'", invocation.label());
                        log::warn!(target: LOG_TARGET, "{}", with_context!(state_error, context));
                    }
                }
                self.report(&error);
                Some(error.to_string())
            }
        };

        if !machine.is_terminal() {
            log::warn!(
                target: LOG_TARGET,
                "activation of '{}' stopped in {}",
                invocation.label(),
                machine.state()
            );
        }

        let report = ActivationReport {
            label: invocation.label().to_string(),
            kind: invocation.kind(),
            state: machine.state(),
            trace: machine.trace().to_vec(),
            failure,
        };

        for listener in &self.listeners {
            listener.operation_performed(&report);
        }
        report
    }

    fn run(&self, machine: &mut DispatchStateMachine, invocation: &InvocationRef) -> Result<()> {
        machine.begin()?;
        let context = guarded(|| {
            let context = self.handler_service.create_context_snapshot();
            self.pre_step.execute(&context)?;
            Ok(context)
        })
        .map_err(Error::PreStepFailure)?;

        machine.pre_step_succeeded()?;
        match invocation {
            InvocationRef::Action { label, action } => {
                guarded(|| action.run()).map_err(invocation_failed(label))?;
            }
            InvocationRef::Command { label, command_id } => {
                let command = guarded(|| Ok(self.command_service.resolve_command(command_id)))
                    .map_err(invocation_failed(label))?
                    .ok_or_else(|| Error::CommandNotFound(command_id.clone()))?;
                log::debug!(target: LOG_TARGET, "executing command '{}'", command.id());
                guarded(|| command.execute_with_checks(&context)).map_err(invocation_failed(label))?;
            }
        }

        machine.complete()
    }
}

impl fmt::Debug for DispatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchEngine")
            .field("log_source", &self.log_source)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
