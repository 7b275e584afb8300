//! Commands declared in the manifest.

use std::process::Command as SystemCommand;

use regex::Regex;
use tracing::debug;

use crate::commands::{Command, CommandError};

use super::{ConfigError, UserCommandEntry};

/// Placeholder replaced by the selection in manifest arguments.
const TEXT_PLACEHOLDER: &str = "{text}";

/// A command built from a validated manifest entry.
#[derive(Debug, Clone)]
pub struct UserCommand {
    name: String,
    pattern: Option<Regex>,
    program: String,
    args: Vec<String>,
    capture_output: bool,
}

impl UserCommand {
    /// Validate a manifest entry and build the command.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` naming the offending entry
    /// when the name or program is empty or the pattern does not compile.
    pub fn from_entry(entry: UserCommandEntry) -> Result<Self, ConfigError> {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "command name cannot be empty".to_string(),
            ));
        }

        if entry.program.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "command '{}': program cannot be empty",
                entry.name
            )));
        }

        let pattern = match entry.pattern {
            Some(raw) => Some(Regex::new(&raw).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "command '{}': invalid pattern: {}",
                    entry.name, e
                ))
            })?),
            None => None,
        };

        Ok(Self {
            name: entry.name,
            pattern,
            program: entry.program,
            args: entry.args,
            capture_output: entry.capture_output,
        })
    }

    /// Argument list with the selection substituted in.
    fn build_args(&self, text: &str) -> Vec<String> {
        let mut substituted = false;
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| {
                if arg.contains(TEXT_PLACEHOLDER) {
                    substituted = true;
                    arg.replace(TEXT_PLACEHOLDER, text)
                } else {
                    arg.clone()
                }
            })
            .collect();
        if !substituted {
            args.push(text.to_string());
        }
        args
    }
}

impl Command for UserCommand {
    fn unique_name(&self) -> &str {
        &self.name
    }

    fn accepts(&self, text: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(text),
            None => true,
        }
    }

    fn run(&self, text: &str) -> Result<Option<String>, CommandError> {
        let args = self.build_args(text);
        debug!(command = %self.name, program = %self.program, "running user command");

        if self.capture_output {
            let output = SystemCommand::new(&self.program)
                .args(&args)
                .output()
                .map_err(|source| CommandError::Spawn {
                    program: self.program.clone(),
                    source,
                })?;
            if !output.status.success() {
                return Err(CommandError::ProgramFailed {
                    program: self.program.clone(),
                    status: output.status,
                });
            }
            let stdout =
                String::from_utf8(output.stdout).map_err(|_| CommandError::NonUtf8Output {
                    program: self.program.clone(),
                })?;
            let trimmed = stdout.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        } else {
            let status = SystemCommand::new(&self.program)
                .args(&args)
                .status()
                .map_err(|source| CommandError::Spawn {
                    program: self.program.clone(),
                    source,
                })?;
            if !status.success() {
                return Err(CommandError::ProgramFailed {
                    program: self.program.clone(),
                    status,
                });
            }
            Ok(None)
        }
    }
}
