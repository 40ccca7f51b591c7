// Recording fakes of the host collaborators shared by the integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crypto_menu::{
    ActivationReport, CommandHandle, CommandService, Error, ErrorSink, EvaluationContext,
    HandlerService, LegacyAction, OperationListener, PreStepHandler, ServiceError,
};

/// Ordered log of every collaborator call
#[derive(Default)]
pub struct CallLog(Mutex<Vec<String>>);

impl CallLog {
    pub fn push(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|c| c.as_str() == call).count()
    }
}

pub struct RecordingAction {
    pub text: String,
    pub log: Arc<CallLog>,
    pub fail: bool,
}

impl LegacyAction for RecordingAction {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn run(&self) -> Result<(), ServiceError> {
        self.log.push(format!("action:{}", self.text));
        if self.fail {
            Err(ServiceError::new(format!("{} crashed", self.text)))
        } else {
            Ok(())
        }
    }
}

pub fn action(text: &str, log: &Arc<CallLog>) -> Arc<dyn LegacyAction> {
    Arc::new(RecordingAction {
        text: text.to_string(),
        log: Arc::clone(log),
        fail: false,
    })
}

pub fn failing_action(text: &str, log: &Arc<CallLog>) -> Arc<dyn LegacyAction> {
    Arc::new(RecordingAction {
        text: text.to_string(),
        log: Arc::clone(log),
        fail: true,
    })
}

/// Action whose `run` panics after recording the call
pub struct PanickingAction {
    pub text: String,
    pub log: Arc<CallLog>,
}

impl LegacyAction for PanickingAction {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn run(&self) -> Result<(), ServiceError> {
        self.log.push(format!("action:{}", self.text));
        panic!("{} blew up", self.text);
    }
}

pub fn panicking_action(text: &str, log: &Arc<CallLog>) -> Arc<dyn LegacyAction> {
    Arc::new(PanickingAction {
        text: text.to_string(),
        log: Arc::clone(log),
    })
}

/// Hands out numbered context snapshots
pub struct SnapshotService {
    pub log: Arc<CallLog>,
    pub counter: Mutex<u32>,
}

impl HandlerService for SnapshotService {
    fn create_context_snapshot(&self) -> EvaluationContext {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        self.log.push("snapshot");
        EvaluationContext::new().with_variable("snapshot", counter.to_string())
    }
}

pub struct RecordingPreStep {
    pub log: Arc<CallLog>,
    pub fail: bool,
    pub seen: Mutex<Vec<EvaluationContext>>,
}

impl PreStepHandler for RecordingPreStep {
    fn execute(&self, context: &EvaluationContext) -> Result<(), ServiceError> {
        self.log.push("pre-step");
        self.seen.lock().unwrap().push(context.clone());
        if self.fail {
            Err(ServiceError::new("no file selected"))
        } else {
            Ok(())
        }
    }
}

pub struct RecordingCommand {
    pub id: String,
    pub log: Arc<CallLog>,
    pub fail: bool,
    pub seen: Arc<Mutex<Vec<EvaluationContext>>>,
}

impl CommandHandle for RecordingCommand {
    fn id(&self) -> &str {
        &self.id
    }

    fn execute_with_checks(&self, context: &EvaluationContext) -> Result<(), ServiceError> {
        self.log.push(format!("command:{}", self.id));
        self.seen.lock().unwrap().push(context.clone());
        if self.fail {
            Err(ServiceError::new("command not enabled"))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct Commands {
    pub known: HashMap<String, Arc<RecordingCommand>>,
}

impl CommandService for Commands {
    fn resolve_command(&self, id: &str) -> Option<Arc<dyn CommandHandle>> {
        self.known
            .get(id)
            .map(|c| Arc::clone(c) as Arc<dyn CommandHandle>)
    }
}

/// Error sink remembering (source, kind) pairs
#[derive(Default)]
pub struct RecordingSink(pub Mutex<Vec<(String, &'static str)>>);

impl RecordingSink {
    pub fn kinds(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().iter().map(|(_, kind)| *kind).collect()
    }
}

impl ErrorSink for RecordingSink {
    fn log_error(&self, source: &str, error: &Error) {
        self.0.lock().unwrap().push((source.to_string(), error.kind()));
    }
}

#[derive(Default)]
pub struct RecordingListener(pub Mutex<Vec<ActivationReport>>);

impl OperationListener for RecordingListener {
    fn operation_performed(&self, report: &ActivationReport) {
        self.0.lock().unwrap().push(report.clone());
    }
}

/// A complete set of fakes
pub struct Host {
    pub log: Arc<CallLog>,
    pub handler_service: Arc<SnapshotService>,
    pub pre_step: Arc<RecordingPreStep>,
    pub commands: Arc<Commands>,
    pub command_contexts: Arc<Mutex<Vec<EvaluationContext>>>,
    pub sink: Arc<RecordingSink>,
    pub listener: Arc<RecordingListener>,
}

impl Host {
    /// Fakes knowing the given command ids; `failing` commands return errors
    pub fn new(command_ids: &[&str], failing: &[&str], pre_step_fails: bool) -> Self {
        let log = Arc::new(CallLog::default());
        let command_contexts = Arc::new(Mutex::new(Vec::new()));
        let known = command_ids
            .iter()
            .map(|id| {
                let command = Arc::new(RecordingCommand {
                    id: id.to_string(),
                    log: Arc::clone(&log),
                    fail: failing.contains(id),
                    seen: Arc::clone(&command_contexts),
                });
                (id.to_string(), command)
            })
            .collect();

        Self {
            handler_service: Arc::new(SnapshotService {
                log: Arc::clone(&log),
                counter: Mutex::new(0),
            }),
            pre_step: Arc::new(RecordingPreStep {
                log: Arc::clone(&log),
                fail: pre_step_fails,
                seen: Mutex::new(Vec::new()),
            }),
            commands: Arc::new(Commands { known }),
            command_contexts,
            sink: Arc::new(RecordingSink::default()),
            listener: Arc::new(RecordingListener::default()),
            log,
        }
    }
}
