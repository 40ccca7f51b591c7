/*!
Activation dispatch: the per-activation state machine and the engine
driving it.
*/

pub mod engine;
pub mod state;

pub use engine::{ActivationReport, DispatchEngine};
pub use state::{DispatchState, DispatchStateMachine};
