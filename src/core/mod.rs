//! Core components for the algorithm menu.
//!
//! This module contains the building blocks: algorithm entries and their
//! registry, invocation classification, menu grouping and construction,
//! dispatch, host service traits and error handling.

// Algorithm entries and type categories
pub mod algorithm;

// Registry of entries
pub mod registry;

// Action/command classification
pub mod invocation;

// Grouping, ordering and tree construction
pub mod menu;

// Activation dispatch
pub mod dispatch;

// Host collaborators
pub mod services;

// Configuration
pub mod config;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, ErrorContext, Result, ServiceError};
pub use self::invocation::{InvocationKind, InvocationRef};
pub use self::dispatch::{DispatchState, ActivationReport};
