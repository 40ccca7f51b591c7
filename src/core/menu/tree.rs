/*!
Two-level menu tree.

A [`MenuTree`] is a value: it is rebuilt on every menu open and dropped
when the menu closes or a selection dispatches.
*/

use sha2::{Digest, Sha256};

use crate::core::constants::fingerprint::{FIELD_SEP, NODE_SEP};
use crate::core::dispatch::{ActivationReport, DispatchEngine};
use crate::core::invocation::{InvocationKind, InvocationRef};

/// Activation target bound to its invocation
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLeaf {
    label: String,
    invocation: InvocationRef,
}

impl MenuLeaf {
    pub fn new(invocation: InvocationRef) -> Self {
        Self {
            label: invocation.label().to_string(),
            invocation,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn invocation(&self) -> &InvocationRef {
        &self.invocation
    }

    pub fn kind(&self) -> InvocationKind {
        self.invocation.kind()
    }

    /// Dispatch this leaf's invocation
    pub fn activate(&self, engine: &DispatchEngine) -> ActivationReport {
        engine.activate(&self.invocation)
    }
}

/// Cascading submenu for one algorithm type
#[derive(Debug, Clone, PartialEq)]
pub struct SubMenu {
    label: String,
    leaves: Vec<MenuLeaf>,
}

impl SubMenu {
    pub fn new(label: impl Into<String>, leaves: Vec<MenuLeaf>) -> Self {
        Self {
            label: label.into(),
            leaves,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn leaves(&self) -> &[MenuLeaf] {
        &self.leaves
    }

    /// Leaf at a display position
    pub fn leaf(&self, index: usize) -> Option<&MenuLeaf> {
        self.leaves.get(index)
    }

    /// First leaf carrying `label`.
    ///
    /// Duplicate labels stay separate leaves; use [`SubMenu::find_all`] or
    /// [`SubMenu::leaf`] to reach the later ones.
    pub fn find(&self, label: &str) -> Option<&MenuLeaf> {
        self.leaves.iter().find(|leaf| leaf.label == label)
    }

    /// Every leaf carrying `label`, in display order
    pub fn find_all<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a MenuLeaf> + 'a {
        self.leaves.iter().filter(move |leaf| leaf.label == label)
    }
}

/// Root entry with one submenu per algorithm type
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTree {
    root_label: String,
    submenus: Vec<SubMenu>,
}

impl MenuTree {
    pub fn new(root_label: impl Into<String>, submenus: Vec<SubMenu>) -> Self {
        Self {
            root_label: root_label.into(),
            submenus,
        }
    }

    /// Label of the top-level cascading entry
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub fn submenus(&self) -> &[SubMenu] {
        &self.submenus
    }

    /// Submenu with exactly this label
    pub fn submenu(&self, label: &str) -> Option<&SubMenu> {
        self.submenus.iter().find(|s| s.label == label)
    }

    /// Leaf addressed by submenu label and leaf label, first match on duplicates
    pub fn find(&self, type_label: &str, leaf_label: &str) -> Option<&MenuLeaf> {
        self.submenu(type_label).and_then(|s| s.find(leaf_label))
    }

    /// All leaves in display order with their submenu label
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &MenuLeaf)> {
        self.submenus
            .iter()
            .flat_map(|s| s.leaves.iter().map(move |leaf| (s.label(), leaf)))
    }

    pub fn leaf_count(&self) -> usize {
        self.submenus.iter().map(|s| s.leaves.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.submenus.is_empty()
    }

    /// SHA-256 over labels, kinds and command ids in display order, hex encoded.
    ///
    /// Two trees with the same fingerprint present identical menus. Action
    /// handles are not part of the digest.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.root_label.as_bytes());
        hasher.update([NODE_SEP]);

        for submenu in &self.submenus {
            hasher.update(submenu.label.as_bytes());
            hasher.update([NODE_SEP]);
            for leaf in &submenu.leaves {
                hasher.update(leaf.label.as_bytes());
                hasher.update([FIELD_SEP]);
                hasher.update(leaf.kind().to_string().as_bytes());
                hasher.update([FIELD_SEP]);
                if let Some(id) = leaf.invocation.command_id() {
                    hasher.update(id.as_bytes());
                }
                hasher.update([NODE_SEP]);
            }
        }

        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    /// Insert this tree as one entry of a host-owned parent menu.
    ///
    /// `index` past the end (or `None`) appends. Returns the position used.
    pub fn attach_to<T>(self, parent: &mut Vec<T>, index: Option<usize>) -> usize
    where
        T: From<MenuTree>,
    {
        let position = index.map_or(parent.len(), |i| i.min(parent.len()));
        parent.insert(position, T::from(self));
        position
    }
}
