//! Extension command configuration.
//!
//! Extra commands are declared, not coded: a TOML manifest at
//! `<config dir>/xact/commands.toml` lists a name, a predicate pattern and
//! a program line for each one. A missing manifest simply means no
//! extensions; a broken one is reported and aborts startup.

mod manifest;
mod user_command;

pub use manifest::{CommandManifest, UserCommandEntry};
pub use user_command::UserCommand;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised while loading the command manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// The manifest exists but could not be read.
    #[error("could not read the command manifest: {0}")]
    ReadError(#[source] io::Error),

    /// The manifest is not valid TOML or does not match the schema.
    #[error("could not parse the command manifest: {0}")]
    ParseError(#[source] toml::de::Error),

    /// The manifest parsed but an entry is unusable.
    #[error("invalid command manifest: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Default manifest location: `<config dir>/xact/commands.toml`.
///
/// # Errors
///
/// Returns `ConfigError::NoConfigDir` when the platform has no
/// configuration directory to anchor the path to.
pub fn default_manifest_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("xact").join("commands.toml"))
}

/// Load the user commands declared in the manifest at `path`.
///
/// A missing manifest is not an error, extensions are optional. Every
/// declared entry must validate; one bad entry fails the whole load.
pub fn load_user_commands(path: &Path) -> Result<Vec<UserCommand>> {
    if !path.exists() {
        debug!(path = %path.display(), "no command manifest, skipping extensions");
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
    let manifest: CommandManifest = toml::from_str(&raw).map_err(ConfigError::ParseError)?;
    debug!(path = %path.display(), entries = manifest.commands.len(), "loaded command manifest");
    manifest.into_commands()
}
