/*!
# Crypto Menu

Context-menu composition and dispatch for the algorithms of a
cryptography workbench.

## Overview

Given the algorithm entries a registry offers, this library:

- Classifies each entry as a legacy action or a command invocation
- Groups entries by translated algorithm type
- Orders types and entries case-insensitively, independent of registration order
- Builds a two-level menu tree under one root entry
- Dispatches a selected leaf, always running the shared pre-step first

All failures during dispatch are reported to an error sink and never
reach the caller. Menus are plain values rebuilt on every open.
*/

// Core components
pub mod core;

// Assembled contribution item
pub mod contribution;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

pub use crate::core::error;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, ErrorContext, Result, ServiceError};
pub use crate::core::algorithm::{AlgorithmEntry, AlgorithmType, CommandBinding, DefaultTypeTranslator, LegacyAction, TypeTranslator};
pub use crate::core::invocation::{InvocationKind, InvocationRef};
pub use crate::core::menu::{GroupedMenu, MenuBuilder, MenuGrouper, MenuLeaf, MenuTree, SubMenu, TypeGroup};
pub use crate::core::dispatch::{ActivationReport, DispatchEngine, DispatchState, DispatchStateMachine};
pub use crate::core::config::MenuConfig;
pub use crate::core::constants::{DEFAULT_LOG_SOURCE, DEFAULT_ROOT_LABEL};

// Re-export registry
pub use crate::core::registry::{
    AlgorithmRegistry, DefaultRegistry, InMemoryRegistry,
    default_registry, list_algorithm_actions, register_algorithm, unregister_algorithm,
};

// Re-export host service traits
pub use crate::core::services::{
    CommandHandle, CommandService, EmptyContextService, ErrorSink, EvaluationContext,
    HandlerService, LogErrorSink, OperationListener, PreStepHandler,
};

// Re-export contribution builder
pub use contribution::{ContributionBuilder, CryptoContribution};
