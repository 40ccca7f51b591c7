/*!
Crypto contribution item.

Produces the algorithm context menu on every open and dispatches
selections. The registry is read fresh each time; nothing is cached
between opens.
*/

use std::sync::Arc;

use crate::core::algorithm::TypeTranslator;
use crate::core::config::MenuConfig;
use crate::core::constants::LOG_TARGET;
use crate::core::dispatch::{ActivationReport, DispatchEngine};
use crate::core::invocation::InvocationRef;
use crate::core::menu::{GroupedMenu, MenuBuilder, MenuGrouper, MenuLeaf, MenuTree};
use crate::core::registry::AlgorithmRegistry;

/// Menu-open and activation entry points
pub struct CryptoContribution {
    pub(crate) registry: Arc<dyn AlgorithmRegistry>,
    pub(crate) translator: Arc<dyn TypeTranslator>,
    pub(crate) engine: DispatchEngine,
    pub(crate) config: MenuConfig,
}

impl CryptoContribution {
    /// Read the registry and group its entries.
    ///
    /// Each rejected entry is reported to the error sink exactly once.
    pub fn group_entries(&self) -> GroupedMenu {
        let pairs = self
            .registry
            .list_algorithm_actions()
            .into_iter()
            .map(|entry| {
                let raw_type = self.registry.algorithm_type(&entry);
                (entry, raw_type)
            });
        let grouped = MenuGrouper::new(self.translator.as_ref()).group(pairs);

        for rejected in grouped.rejected() {
            log::debug!(target: LOG_TARGET, "skipping menu entry: {}", rejected);
            self.engine.report(rejected);
        }
        grouped
    }

    /// Build the menu from a fresh registry snapshot
    pub fn build_menu(&self) -> MenuTree {
        let grouped = self.group_entries();
        let tree = MenuBuilder::new(&self.config).build(&grouped);
        log::debug!(
            target: LOG_TARGET,
            "built '{}' with {} submenus, {} leaves",
            tree.root_label(),
            tree.submenus().len(),
            tree.leaf_count()
        );
        tree
    }

    /// Build the menu and insert it into a host parent menu at the configured index
    pub fn fill<T>(&self, parent: &mut Vec<T>) -> usize
    where
        T: From<MenuTree>,
    {
        self.build_menu().attach_to(parent, self.config.insert_index)
    }

    /// Dispatch an invocation
    pub fn activate(&self, invocation: &InvocationRef) -> ActivationReport {
        self.engine.activate(invocation)
    }

    /// Dispatch a leaf of a built tree
    pub fn activate_leaf(&self, leaf: &MenuLeaf) -> ActivationReport {
        leaf.activate(&self.engine)
    }

    pub fn engine(&self) -> &DispatchEngine {
        &self.engine
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }
}

impl std::fmt::Debug for CryptoContribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoContribution")
            .field("engine", &self.engine)
            .field("config", &self.config)
            .finish()
    }
}
