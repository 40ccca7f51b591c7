/*!
Registry of algorithm entries.

The menu reads the registry fresh on every open; implementations must
return an owned snapshot so later registrations cannot change a menu that
is already built.
*/

pub mod manager;

use crate::core::algorithm::AlgorithmEntry;

/// Source of algorithm entries
pub trait AlgorithmRegistry: Send + Sync {
    /// All registered entries
    fn list_algorithm_actions(&self) -> Vec<AlgorithmEntry>;

    /// Raw type identifier of an entry
    fn algorithm_type(&self, entry: &AlgorithmEntry) -> String {
        entry.raw_type().to_string()
    }
}

// Re-export registry manager functions
pub use manager::{
    default_registry,
    list_algorithm_actions,
    register_algorithm,
    unregister_algorithm,
    DefaultRegistry,
    InMemoryRegistry,
};
