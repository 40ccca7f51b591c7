/*!
Serialization support for built menus.

This module provides a serializable view of a [`MenuTree`]: labels, kinds
and command identifiers, without the action handles. It's only built when
the `serde-support` feature is enabled.
*/

use serde::{Deserialize, Serialize};

use crate::core::invocation::InvocationKind;
use crate::core::menu::{MenuTree, SubMenu};

/// Serializable version of a menu leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeMenuLeaf {
    pub label: String,
    pub kind: InvocationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

/// Serializable version of a type submenu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeSubMenu {
    pub label: String,
    pub leaves: Vec<SerdeMenuLeaf>,
}

/// Serializable version of MenuTree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeMenuTree {
    pub root_label: String,
    pub submenus: Vec<SerdeSubMenu>,
    /// Structural fingerprint of the source tree
    pub fingerprint: String,
}

impl From<&SubMenu> for SerdeSubMenu {
    fn from(submenu: &SubMenu) -> Self {
        Self {
            label: submenu.label().to_string(),
            leaves: submenu
                .leaves()
                .iter()
                .map(|leaf| SerdeMenuLeaf {
                    label: leaf.label().to_string(),
                    kind: leaf.kind(),
                    command_id: leaf.invocation().command_id().map(str::to_string),
                })
                .collect(),
        }
    }
}

impl From<&MenuTree> for SerdeMenuTree {
    fn from(tree: &MenuTree) -> Self {
        Self {
            root_label: tree.root_label().to_string(),
            submenus: tree.submenus().iter().map(SerdeSubMenu::from).collect(),
            fingerprint: tree.fingerprint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invocation::InvocationRef;
    use crate::core::menu::MenuLeaf;

    #[test]
    fn test_snapshot_of_tree() {
        let tree = MenuTree::new(
            "Encryption/Decryption",
            vec![SubMenu::new(
                "Hash Functions",
                vec![MenuLeaf::new(InvocationRef::Command {
                    label: "SHA-1".into(),
                    command_id: "cmd.sha1".into(),
                })],
            )],
        );

        let snapshot = SerdeMenuTree::from(&tree);
        assert_eq!(snapshot.root_label, "Encryption/Decryption");
        assert_eq!(snapshot.submenus[0].leaves[0].kind, InvocationKind::Command);
        assert_eq!(snapshot.submenus[0].leaves[0].command_id.as_deref(), Some("cmd.sha1"));
        assert_eq!(snapshot.fingerprint, tree.fingerprint());
    }
}
