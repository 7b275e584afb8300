//! Insertion-ordered command registry.
//!
//! Registration order is meaningful: the menu lists applicable commands in
//! the order they were registered, built-ins first.

use thiserror::Error;
use tracing::debug;

use super::{builtin, Command};

/// Errors raised while populating the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A command reported an empty name.
    #[error("command names cannot be empty")]
    EmptyName,

    /// A command reported a name that cannot survive a menu round trip.
    #[error("command name {0:?} contains line breaks or surrounding whitespace")]
    InvalidName(String),

    /// Two commands reported the same name.
    #[error("duplicate command name '{0}'")]
    DuplicateName(String),
}

/// Holds every available command in registration order.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a registry pre-populated with the built-in commands.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for command in builtin::all() {
            registry.register(command)?;
        }
        Ok(registry)
    }

    /// Add a command at the end of the registration order.
    ///
    /// # Errors
    ///
    /// Rejects empty, multi-line, whitespace-padded and already-taken names.
    /// The menu maps the user's pick back to a command by name, so a
    /// collision would make one of the two unreachable.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), RegistryError> {
        let name = command.unique_name();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        // Menu rows are newline-separated and the picked row comes back
        // trimmed, so such a name could never match the user's pick.
        if name != name.trim() || name.contains('\n') {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.commands.iter().any(|c| c.unique_name() == name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        debug!(name, "registered command");
        self.commands.push(command);
        Ok(())
    }

    /// Iterate over all commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(Box::as_ref)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
