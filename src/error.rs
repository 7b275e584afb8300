//! Centralized error types for xact.
//!
//! This module aggregates the per-module error enums into one application
//! error with user-friendly messages. All error types use `thiserror`.

use thiserror::Error;

use crate::commands::{CommandError, RegistryError};
use crate::config::ConfigError;
use crate::ui::UiError;
use crate::x11::SelectionError;

/// The main application error type.
///
/// Preserves the underlying error context for the log file while
/// [`AppError::user_message`] produces the short form shown in the UI.
#[derive(Debug, Error)]
pub enum AppError {
    /// No registered command accepts the current selection.
    #[error("no command accepts the current selection")]
    NoApplicableCommand,

    /// The chosen command started but failed.
    #[error("command '{command}' failed: {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: CommandError,
    },

    /// The menu returned a choice that was never offered.
    #[error("the menu returned an unknown choice '{0}'")]
    UnknownMenuChoice(String),

    /// Registry population errors.
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// Command manifest errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// X selection errors.
    #[error("{0}")]
    Selection(#[from] SelectionError),

    /// Picker frontend errors.
    #[error("{0}")]
    Ui(#[from] UiError),
}

impl AppError {
    /// Get a user-friendly message for display.
    ///
    /// This returns a message suitable for showing in a dialog, without
    /// technical jargon or error chains.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NoApplicableCommand => {
                "No command can handle the current selection.".to_string()
            }
            AppError::CommandFailed { command, source } => {
                format!("Command '{}' failed:\n{}", command, source)
            }
            AppError::UnknownMenuChoice(choice) => {
                format!("The menu returned '{}', which is not a known command.", choice)
            }
            AppError::Registry(e) => format!("Command setup failed: {}", e),
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find the configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read the command manifest. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "The command manifest is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Command manifest error: {}", msg),
            },
            AppError::Selection(_) => {
                "Could not access the X selection. Is an X server running and xclip installed?"
                    .to_string()
            }
            AppError::Ui(e) => format!("Could not drive the picker: {}", e),
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::NoConfigDir;
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let registry_err = RegistryError::DuplicateName("Twice".to_string());
        let app_err: AppError = registry_err.into();
        assert!(matches!(app_err, AppError::Registry(_)));
        assert!(app_err.to_string().contains("Twice"));
    }

    #[test]
    fn test_user_message_no_applicable_command() {
        let err = AppError::NoApplicableCommand;
        let msg = err.user_message();
        assert!(msg.contains("No command can handle"));
    }

    #[test]
    fn test_user_message_command_failed_names_command() {
        let err = AppError::CommandFailed {
            command: "Google translate".to_string(),
            source: CommandError::UnexpectedResponse("empty body".to_string()),
        };
        let msg = err.user_message();
        assert!(msg.contains("Google translate"));
        assert!(msg.contains("empty body"));
    }

    #[test]
    fn test_user_message_unknown_choice() {
        let err = AppError::UnknownMenuChoice("typed something".to_string());
        let msg = err.user_message();
        assert!(msg.contains("typed something"));
        assert!(msg.contains("not a known command"));
    }

    #[test]
    fn test_user_message_manifest_validation() {
        let err = AppError::Config(ConfigError::ValidationError(
            "command 'X': program cannot be empty".to_string(),
        ));
        let msg = err.user_message();
        assert!(msg.contains("program cannot be empty"));
    }

    #[test]
    fn test_user_message_selection() {
        let err = AppError::Selection(crate::x11::SelectionError::NonUtf8);
        let msg = err.user_message();
        assert!(msg.contains("X selection"));
    }
}
