/*!
Builds the menu tree from grouped entries.
*/

use crate::core::config::MenuConfig;
use crate::core::menu::grouper::GroupedMenu;
use crate::core::menu::tree::{MenuLeaf, MenuTree, SubMenu};

/// Turns a [`GroupedMenu`] into a [`MenuTree`].
///
/// Building has no side effects, and the same input always yields a
/// structurally identical tree.
#[derive(Debug, Clone)]
pub struct MenuBuilder {
    root_label: String,
    skip_empty_groups: bool,
}

impl MenuBuilder {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            root_label: config.root_label.clone(),
            skip_empty_groups: config.skip_empty_groups,
        }
    }

    pub fn build(&self, grouped: &GroupedMenu) -> MenuTree {
        let submenus = grouped
            .groups()
            .iter()
            .filter(|group| !(self.skip_empty_groups && group.is_empty()))
            .map(|group| {
                let leaves = group.invocations().cloned().map(MenuLeaf::new).collect();
                SubMenu::new(group.label(), leaves)
            })
            .collect();

        MenuTree::new(self.root_label.clone(), submenus)
    }
}

impl Default for MenuBuilder {
    fn default() -> Self {
        Self::new(&MenuConfig::default())
    }
}
