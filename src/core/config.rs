/*!
Configuration for the algorithm menu.
*/

use crate::config_err;
use crate::core::constants::{DEFAULT_LOG_SOURCE, DEFAULT_ROOT_LABEL};
use crate::core::error::Result;

/// Menu composition and dispatch settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(default))]
pub struct MenuConfig {
    /// Text of the top-level cascading entry
    pub root_label: String,
    /// Position of the root entry in the host's parent menu; `None` appends
    pub insert_index: Option<usize>,
    /// Source identifier handed to the error sink
    pub log_source: String,
    /// Omit type submenus whose entries were all rejected
    pub skip_empty_groups: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            insert_index: None,
            log_source: DEFAULT_LOG_SOURCE.to_string(),
            skip_empty_groups: true,
        }
    }
}

impl MenuConfig {
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    pub fn with_insert_index(mut self, index: usize) -> Self {
        self.insert_index = Some(index);
        self
    }

    pub fn with_log_source(mut self, source: impl Into<String>) -> Self {
        self.log_source = source.into();
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.root_label.trim().is_empty() {
            return config_err!("root label must not be blank");
        }
        if self.log_source.trim().is_empty() {
            return config_err!("log source must not be blank");
        }
        Ok(())
    }
}
