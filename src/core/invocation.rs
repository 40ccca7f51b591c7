/*!
Invocation references.

Every menu leaf is bound to an [`InvocationRef`]: either a legacy action
run directly, or a command identifier resolved and executed through the
host's command service. Classification is the only place where an entry's
optional mechanisms are inspected; downstream code matches on the variant.
*/

use std::fmt;
use std::sync::Arc;

use crate::core::algorithm::{AlgorithmEntry, LegacyAction};
use crate::core::error::{Error, Result};

/// Mechanism kind of an entry or invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum InvocationKind {
    /// Legacy action object
    Action,
    /// Command identifier
    Command,
    /// No mechanism present
    None,
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationKind::Action => write!(f, "Action"),
            InvocationKind::Command => write!(f, "Command"),
            InvocationKind::None => write!(f, "None"),
        }
    }
}

/// How a selected leaf is executed
#[derive(Clone)]
pub enum InvocationRef {
    /// Run a legacy action
    Action {
        label: String,
        action: Arc<dyn LegacyAction>,
    },
    /// Resolve and execute a command
    Command {
        label: String,
        command_id: String,
    },
}

impl InvocationRef {
    /// Classify an entry.
    ///
    /// A command identifier takes precedence over a legacy action when an
    /// entry carries both. Entries with neither are rejected with
    /// [`Error::MissingInvocationMechanism`].
    pub fn classify(entry: &AlgorithmEntry) -> Result<Self> {
        if let Some(binding) = entry.command_binding() {
            return Ok(InvocationRef::Command {
                label: binding.handler_text.clone(),
                command_id: binding.command_id.clone(),
            });
        }

        if let Some(action) = entry.action_handle() {
            return Ok(InvocationRef::Action {
                label: action.text(),
                action: Arc::clone(action),
            });
        }

        Err(Error::MissingInvocationMechanism {
            entry: entry.id().to_string(),
        })
    }

    /// Display label of the leaf
    pub fn label(&self) -> &str {
        match self {
            InvocationRef::Action { label, .. } | InvocationRef::Command { label, .. } => label,
        }
    }

    /// Mechanism kind
    pub fn kind(&self) -> InvocationKind {
        match self {
            InvocationRef::Action { .. } => InvocationKind::Action,
            InvocationRef::Command { .. } => InvocationKind::Command,
        }
    }

    /// Command identifier for command invocations
    pub fn command_id(&self) -> Option<&str> {
        match self {
            InvocationRef::Command { command_id, .. } => Some(command_id),
            InvocationRef::Action { .. } => None,
        }
    }
}

impl PartialEq for InvocationRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                InvocationRef::Action { label: a, action: x },
                InvocationRef::Action { label: b, action: y },
            ) => a == b && Arc::ptr_eq(x, y),
            (
                InvocationRef::Command { label: a, command_id: x },
                InvocationRef::Command { label: b, command_id: y },
            ) => a == b && x == y,
            _ => false,
        }
    }
}

impl fmt::Debug for InvocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationRef::Action { label, .. } => f.debug_tuple("Action").field(label).finish(),
            InvocationRef::Command { label, command_id } => {
                f.debug_tuple("Command").field(label).field(command_id).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ServiceError;

    struct Named(&'static str);

    impl LegacyAction for Named {
        fn text(&self) -> String {
            self.0.to_string()
        }

        fn run(&self) -> std::result::Result<(), ServiceError> {
            Ok(())
        }
    }

    #[test]
    fn test_classify_command() {
        let entry = AlgorithmEntry::with_command("sha1", "hash", "cmd.sha1", "SHA-1");
        let invocation = InvocationRef::classify(&entry).unwrap();
        assert_eq!(invocation.kind(), InvocationKind::Command);
        assert_eq!(invocation.label(), "SHA-1");
        assert_eq!(invocation.command_id(), Some("cmd.sha1"));
    }

    #[test]
    fn test_classify_action() {
        let entry = AlgorithmEntry::with_action("aes", "blockCipher", Arc::new(Named("AES")));
        let invocation = InvocationRef::classify(&entry).unwrap();
        assert_eq!(invocation.kind(), InvocationKind::Action);
        assert_eq!(invocation.label(), "AES");
        assert_eq!(invocation.command_id(), None);
    }

    #[test]
    fn test_command_precedence() {
        let entry = AlgorithmEntry::with_action("rsa", "asymmetricBlockCipher", Arc::new(Named("RSA legacy")))
            .command("cmd.rsa", "RSA");
        let invocation = InvocationRef::classify(&entry).unwrap();
        assert_eq!(invocation.kind(), InvocationKind::Command);
        assert_eq!(invocation.label(), "RSA");
    }

    #[test]
    fn test_missing_mechanism_rejected() {
        let entry = AlgorithmEntry::new("ghost", "misc");
        match InvocationRef::classify(&entry) {
            Err(Error::MissingInvocationMechanism { entry }) => assert_eq!(entry, "ghost"),
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_action_equality_is_by_handle() {
        let shared: Arc<dyn LegacyAction> = Arc::new(Named("AES"));
        let a = AlgorithmEntry::with_action("aes", "blockCipher", Arc::clone(&shared));
        let b = AlgorithmEntry::with_action("aes-copy", "blockCipher", Arc::new(Named("AES")));

        let first = InvocationRef::classify(&a).unwrap();
        let again = InvocationRef::classify(&a).unwrap();
        let other = InvocationRef::classify(&b).unwrap();
        assert_eq!(first, again);
        assert_ne!(first, other);
    }
}
