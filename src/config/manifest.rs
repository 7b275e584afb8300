//! Manifest schema for user-declared commands.

use serde::Deserialize;

use super::{Result, UserCommand};

/// Top level of `commands.toml`: a list of `[[commands]]` entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandManifest {
    #[serde(default)]
    pub commands: Vec<UserCommandEntry>,
}

/// One declared command.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCommandEntry {
    /// Menu name. Must be unique across built-ins and other entries.
    pub name: String,

    /// Regular expression the selection must match. Entries without a
    /// pattern accept every selection.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Program to run.
    pub program: String,

    /// Arguments for the program. Each occurrence of `{text}` is replaced
    /// by the selection; without a placeholder the selection is appended
    /// as the final argument.
    #[serde(default)]
    pub args: Vec<String>,

    /// When true, the program's trimmed stdout becomes the surfaced result.
    #[serde(default)]
    pub capture_output: bool,
}

impl CommandManifest {
    /// Validate every entry and build the runnable commands, in manifest
    /// order.
    pub fn into_commands(self) -> Result<Vec<UserCommand>> {
        self.commands
            .into_iter()
            .map(UserCommand::from_entry)
            .collect()
    }
}
