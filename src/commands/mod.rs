//! The command contract and the commands shipped with xact.
//!
//! A command is a named action gated by a predicate over the selected text.
//! The registry holds every command in registration order; the selector
//! filters them by predicate and the application runs the chosen one.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

pub mod builtin;
mod registry;

pub use registry::{CommandRegistry, RegistryError};

/// A single context-sensitive action over the selected text.
///
/// Implementations are constructed once at startup, are immutable afterwards
/// and are owned by the [`CommandRegistry`].
pub trait Command {
    /// Stable, human-readable name.
    ///
    /// Shown in the disambiguation menu and used to map the user's pick back
    /// to the command, so it must be unique within the registry. Uniqueness
    /// is enforced at registration time.
    fn unique_name(&self) -> &str;

    /// Whether this command applies to the given selection.
    ///
    /// Evaluated for every registered command on every invocation, so it must
    /// be total, side-effect free and cheap: no network, no process spawning.
    /// The default accepts everything.
    fn accepts(&self, text: &str) -> bool {
        let _ = text;
        true
    }

    /// Execute the command against the selection.
    ///
    /// May have side effects such as network calls or spawning external
    /// programs. Returns `Some` when there is a textual result to surface
    /// and copy, `None` for fire-and-forget actions like opening a browser.
    ///
    /// # Errors
    ///
    /// Any failure propagates unmodified to the caller, which attaches the
    /// command's name and reports it to the user.
    fn run(&self, text: &str) -> Result<Option<String>, CommandError>;
}

/// Errors raised by command bodies.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The selection passed the predicate but could not be processed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An external program could not be started.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// An external program ran but reported failure.
    #[error("'{program}' exited with {status}")]
    ProgramFailed { program: String, status: ExitStatus },

    /// An external program printed something that is not UTF-8.
    #[error("'{program}' produced non-UTF-8 output")]
    NonUtf8Output { program: String },

    /// Opening a target in the default browser failed.
    #[error("failed to open '{target}' in the default browser: {source}")]
    Browser {
        target: String,
        #[source]
        source: io::Error,
    },

    /// An HTTP request failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A remote service answered with something unusable.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
