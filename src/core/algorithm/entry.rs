/*!
Algorithm entries as supplied by a registry.

An entry is one discoverable operation offering. It carries a raw type
identifier and, normally, exactly one invocation mechanism: a command
identifier (with the text its handler provides) or a legacy action.
Entries built by hand may carry both or neither; classification into an
[`InvocationRef`](crate::core::invocation::InvocationRef) resolves that.
*/

use std::fmt;
use std::sync::Arc;

use crate::core::error::ServiceError;
use crate::core::invocation::InvocationKind;

/// Legacy action object: runs without an evaluation context
pub trait LegacyAction: Send + Sync {
    /// Menu text of the action
    fn text(&self) -> String;

    /// Run the action
    fn run(&self) -> std::result::Result<(), ServiceError>;
}

/// Command identifier plus the text supplied by its handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBinding {
    /// Identifier resolved through the command service
    pub command_id: String,
    /// Menu text provided by the command's handler
    pub handler_text: String,
}

impl CommandBinding {
    pub fn new(command_id: impl Into<String>, handler_text: impl Into<String>) -> Self {
        Self {
            command_id: command_id.into(),
            handler_text: handler_text.into(),
        }
    }
}

/// One registered algorithm offering
#[derive(Clone)]
pub struct AlgorithmEntry {
    id: String,
    raw_type: String,
    command: Option<CommandBinding>,
    action: Option<Arc<dyn LegacyAction>>,
}

impl AlgorithmEntry {
    /// Create an entry without any invocation mechanism
    pub fn new(id: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_type: raw_type.into(),
            command: None,
            action: None,
        }
    }

    /// Create an entry invoked through a command
    pub fn with_command(
        id: impl Into<String>,
        raw_type: impl Into<String>,
        command_id: impl Into<String>,
        handler_text: impl Into<String>,
    ) -> Self {
        Self::new(id, raw_type).command(command_id, handler_text)
    }

    /// Create an entry invoked through a legacy action
    pub fn with_action(
        id: impl Into<String>,
        raw_type: impl Into<String>,
        action: Arc<dyn LegacyAction>,
    ) -> Self {
        Self::new(id, raw_type).action(action)
    }

    /// Attach a command binding
    pub fn command(mut self, command_id: impl Into<String>, handler_text: impl Into<String>) -> Self {
        self.command = Some(CommandBinding::new(command_id, handler_text));
        self
    }

    /// Attach a legacy action
    pub fn action(mut self, action: Arc<dyn LegacyAction>) -> Self {
        self.action = Some(action);
        self
    }

    /// Registry-unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw (untranslated) type identifier
    pub fn raw_type(&self) -> &str {
        &self.raw_type
    }

    /// Command binding, if any
    pub fn command_binding(&self) -> Option<&CommandBinding> {
        self.command.as_ref()
    }

    /// Command identifier, if any
    pub fn command_id(&self) -> Option<&str> {
        self.command.as_ref().map(|c| c.command_id.as_str())
    }

    /// Legacy action handle, if any
    pub fn action_handle(&self) -> Option<&Arc<dyn LegacyAction>> {
        self.action.as_ref()
    }

    /// Which mechanism classification will pick (command wins over action)
    pub fn invocation_kind(&self) -> InvocationKind {
        if self.command.is_some() {
            InvocationKind::Command
        } else if self.action.is_some() {
            InvocationKind::Action
        } else {
            InvocationKind::None
        }
    }

    /// Menu text for the mechanism classification will pick
    pub fn display_label(&self) -> Option<String> {
        match (&self.command, &self.action) {
            (Some(command), _) => Some(command.handler_text.clone()),
            (None, Some(action)) => Some(action.text()),
            (None, None) => None,
        }
    }
}

impl fmt::Debug for AlgorithmEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmEntry")
            .field("id", &self.id)
            .field("raw_type", &self.raw_type)
            .field("command", &self.command)
            .field("action", &self.action.as_ref().map(|a| a.text()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop(&'static str);

    impl LegacyAction for Noop {
        fn text(&self) -> String {
            self.0.to_string()
        }

        fn run(&self) -> std::result::Result<(), ServiceError> {
            Ok(())
        }
    }

    #[test]
    fn test_invocation_kind() {
        let cmd = AlgorithmEntry::with_command("sha1", "hash", "cmd.sha1", "SHA-1");
        assert_eq!(cmd.invocation_kind(), InvocationKind::Command);
        assert_eq!(cmd.command_id(), Some("cmd.sha1"));

        let act = AlgorithmEntry::with_action("aes", "blockCipher", Arc::new(Noop("AES")));
        assert_eq!(act.invocation_kind(), InvocationKind::Action);
        assert_eq!(act.display_label().as_deref(), Some("AES"));

        let bare = AlgorithmEntry::new("ghost", "misc");
        assert_eq!(bare.invocation_kind(), InvocationKind::None);
        assert_eq!(bare.display_label(), None);
    }

    #[test]
    fn test_command_label_wins_when_both_present() {
        let both = AlgorithmEntry::with_action("rsa", "asymmetricBlockCipher", Arc::new(Noop("RSA (action)")))
            .command("cmd.rsa", "RSA");
        assert_eq!(both.invocation_kind(), InvocationKind::Command);
        assert_eq!(both.display_label().as_deref(), Some("RSA"));
    }

    #[test]
    fn test_debug_shows_action_text() {
        let act = AlgorithmEntry::with_action("aes", "blockCipher", Arc::new(Noop("AES")));
        assert!(format!("{:?}", act).contains("\"AES\""));
    }
}
