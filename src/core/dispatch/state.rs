/*!
Dispatch state machine.

One machine per activation: `Idle -> PreStepRunning -> Dispatching ->
{Completed | Failed}`, with `PreStepRunning -> Failed` when the pre-step
fails. Terminal states accept no further transitions.
*/

use std::fmt;

use crate::core::error::Result;
use crate::invalid_state_err;

/// State of one activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchState {
    /// Waiting for an activation
    Idle,
    /// Shared pre-step handler running
    PreStepRunning,
    /// Action run or command execution in progress
    Dispatching,
    /// Invocation returned normally
    Completed,
    /// Pre-step or invocation failed
    Failed,
}

impl DispatchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DispatchState::Completed | DispatchState::Failed)
    }
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchState::Idle => write!(f, "Idle"),
            DispatchState::PreStepRunning => write!(f, "PreStepRunning"),
            DispatchState::Dispatching => write!(f, "Dispatching"),
            DispatchState::Completed => write!(f, "Completed"),
            DispatchState::Failed => write!(f, "Failed"),
        }
    }
}

/// Tracks one activation and records every state it visits
#[derive(Debug, Clone)]
pub struct DispatchStateMachine {
    state: DispatchState,
    trace: Vec<DispatchState>,
}

impl Default for DispatchStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchStateMachine {
    pub fn new() -> Self {
        Self {
            state: DispatchState::Idle,
            trace: vec![DispatchState::Idle],
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// States visited so far, starting with `Idle`
    pub fn trace(&self) -> &[DispatchState] {
        &self.trace
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn can_begin(&self) -> bool {
        self.state == DispatchState::Idle
    }

    pub fn can_dispatch(&self) -> bool {
        self.state == DispatchState::PreStepRunning
    }

    pub fn can_complete(&self) -> bool {
        self.state == DispatchState::Dispatching
    }

    pub fn can_fail(&self) -> bool {
        matches!(self.state, DispatchState::PreStepRunning | DispatchState::Dispatching)
    }

    /// Idle -> PreStepRunning
    pub fn begin(&mut self) -> Result<()> {
        if !self.can_begin() {
            return invalid_state_err!(DispatchState::Idle, self.state);
        }
        self.enter(DispatchState::PreStepRunning);
        Ok(())
    }

    /// PreStepRunning -> Dispatching
    pub fn pre_step_succeeded(&mut self) -> Result<()> {
        if !self.can_dispatch() {
            return invalid_state_err!(DispatchState::PreStepRunning, self.state);
        }
        self.enter(DispatchState::Dispatching);
        Ok(())
    }

    /// Dispatching -> Completed
    pub fn complete(&mut self) -> Result<()> {
        if !self.can_complete() {
            return invalid_state_err!(DispatchState::Dispatching, self.state);
        }
        self.enter(DispatchState::Completed);
        Ok(())
    }

    /// PreStepRunning | Dispatching -> Failed
    pub fn fail(&mut self) -> Result<()> {
        if !self.can_fail() {
            return invalid_state_err!("PreStepRunning or Dispatching", self.state);
        }
        self.enter(DispatchState::Failed);
        Ok(())
    }

    fn enter(&mut self, state: DispatchState) {
        self.state = state;
        self.trace.push(state);
    }
}
