/*!
Registry manager for algorithm entries.

This module provides an in-memory registry plus a process-wide default
instance so plugins can register entries at startup and the menu can
read them on every open.
*/

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::core::algorithm::AlgorithmEntry;
use crate::core::error::Result;
use crate::core::registry::AlgorithmRegistry;
use crate::registry_err;

/// Registry of algorithm entries kept in registration order
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: RwLock<Vec<AlgorithmEntry>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry; identifiers must be unique
    pub fn register(&self, entry: AlgorithmEntry) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.iter().any(|e| e.id() == entry.id()) {
            return registry_err!("algorithm '{}' already registered", entry.id());
        }
        log::debug!(target: crate::core::constants::LOG_TARGET, "registered algorithm '{}'", entry.id());
        entries.push(entry);
        Ok(())
    }

    /// Remove an entry by identifier
    pub fn unregister(&self, id: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|e| e.id() != id);
        entries.len() != before
    }

    /// Copy of the current entries
    pub fn snapshot(&self) -> Vec<AlgorithmEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl AlgorithmRegistry for InMemoryRegistry {
    fn list_algorithm_actions(&self) -> Vec<AlgorithmEntry> {
        self.snapshot()
    }
}

// Global registry instance
static REGISTRY: Lazy<InMemoryRegistry> = Lazy::new(InMemoryRegistry::new);

/// Handle to the process-wide registry
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRegistry;

impl AlgorithmRegistry for DefaultRegistry {
    fn list_algorithm_actions(&self) -> Vec<AlgorithmEntry> {
        REGISTRY.snapshot()
    }
}

// Public API

/// Get the process-wide registry
pub fn default_registry() -> &'static InMemoryRegistry {
    &REGISTRY
}

/// Register an entry with the process-wide registry
pub fn register_algorithm(entry: AlgorithmEntry) -> Result<()> {
    REGISTRY.register(entry)
}

/// Remove an entry from the process-wide registry
pub fn unregister_algorithm(id: &str) -> bool {
    REGISTRY.unregister(id)
}

/// Snapshot of the process-wide registry
pub fn list_algorithm_actions() -> Vec<AlgorithmEntry> {
    REGISTRY.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;

    #[test]
    fn test_register_and_snapshot() {
        let registry = InMemoryRegistry::new();
        registry
            .register(AlgorithmEntry::with_command("sha1", "hash", "cmd.sha1", "SHA-1"))
            .unwrap();
        registry
            .register(AlgorithmEntry::with_command("aes", "blockCipher", "cmd.aes", "AES"))
            .unwrap();

        let snapshot = registry.list_algorithm_actions();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id(), "sha1");

        // Later registrations do not leak into an earlier snapshot
        registry.register(AlgorithmEntry::new("ghost", "misc")).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let registry = InMemoryRegistry::new();
        registry.register(AlgorithmEntry::new("rsa", "asymmetricBlockCipher")).unwrap();
        let err = registry
            .register(AlgorithmEntry::new("rsa", "signature"))
            .unwrap_err();
        assert!(matches!(err, Error::Registry(_)));
    }

    #[test]
    fn test_unregister() {
        let registry = InMemoryRegistry::new();
        registry.register(AlgorithmEntry::new("des", "blockCipher")).unwrap();
        assert!(registry.unregister("des"));
        assert!(!registry.unregister("des"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_global_registry() {
        register_algorithm(AlgorithmEntry::with_command(
            "manager-test-md5",
            "hash",
            "cmd.md5",
            "MD5",
        ))
        .unwrap();
        assert!(list_algorithm_actions().iter().any(|e| e.id() == "manager-test-md5"));
        assert!(DefaultRegistry
            .list_algorithm_actions()
            .iter()
            .any(|e| e.id() == "manager-test-md5"));
        assert!(unregister_algorithm("manager-test-md5"));
        assert!(default_registry().snapshot().iter().all(|e| e.id() != "manager-test-md5"));
    }
}
