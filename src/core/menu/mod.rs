/*!
Menu composition: grouping, ordering and tree construction.
*/

pub mod builder;
pub mod grouper;
pub mod tree;

pub use builder::MenuBuilder;
pub use grouper::{compare_labels, GroupedEntry, GroupedMenu, MenuGrouper, TypeGroup};
pub use tree::{MenuLeaf, MenuTree, SubMenu};
