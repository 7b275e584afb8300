//! Top-level run sequence.
//!
//! One invocation runs straight through: load extensions, read the X
//! selection, pick the command, run it, report the result. `App` owns the
//! collaborators behind traits so tests can swap in fakes for the X server
//! and the picker.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::commands::CommandRegistry;
use crate::config;
use crate::error::{AppError, Result};
use crate::selector::{select_command, Selection};
use crate::ui::Ui;
use crate::x11::{ClipboardSink, SelectionSource};

/// Appended to every surfaced result.
const RESULT_NOTICE: &str = "Result copied to the X selection.";

/// How a completed invocation ended.
///
/// Cancellation is a completed invocation: the user saw the menu and chose
/// to walk away, so the process still exits cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The chosen command ran; `result` is what was surfaced, if anything.
    Done { result: Option<String> },
    /// The user dismissed the picker; nothing ran.
    Cancelled,
}

/// The application: one run-to-completion invocation.
pub struct App {
    /// Every available command, built-ins first.
    registry: CommandRegistry,
    /// Picker frontend for menus and result dialogs.
    ui: Box<dyn Ui>,
    /// Where the selected text comes from.
    selection: Box<dyn SelectionSource>,
    /// Where the result text goes.
    clipboard: Box<dyn ClipboardSink>,
    /// Command manifest location; `None` means the default path.
    manifest_path: Option<PathBuf>,
}

impl App {
    /// Create a new application instance.
    pub fn new(
        registry: CommandRegistry,
        ui: Box<dyn Ui>,
        selection: Box<dyn SelectionSource>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        debug!(commands = registry.len(), "creating application");
        Self {
            registry,
            ui,
            selection,
            clipboard,
            manifest_path: None,
        }
    }

    /// Load user commands from `path` instead of the default manifest
    /// location. Useful for testing and for the `--commands` flag.
    pub fn with_manifest_path(mut self, path: PathBuf) -> Self {
        self.manifest_path = Some(path);
        self
    }

    /// Run one full invocation.
    ///
    /// # Errors
    ///
    /// Errors that occur after the selection is in hand are shown to the
    /// user once through the UI, then returned so the process can exit
    /// non-zero. Startup errors (a broken manifest, an unreadable
    /// selection) come back without a dialog.
    pub fn run(&mut self) -> Result<Outcome> {
        self.load_extensions()?;

        let raw = self.selection.read()?;
        let text = sanitize(&raw);
        info!(selection = %text, "acquired selection");

        let command = match select_command(&text, &self.registry, self.ui.as_ref()) {
            Ok(Selection::Chosen(command)) => command,
            Ok(Selection::Cancelled) => {
                info!("menu dismissed, nothing to run");
                return Ok(Outcome::Cancelled);
            }
            Err(error) => return Err(self.fail(error)),
        };

        info!(command = command.unique_name(), "running command");
        let result = match command.run(&text) {
            Ok(result) => result,
            Err(source) => {
                let error = AppError::CommandFailed {
                    command: command.unique_name().to_string(),
                    source,
                };
                return Err(self.fail(error));
            }
        };

        match result {
            Some(output) => {
                if let Err(error) = self.report(&output) {
                    return Err(self.fail(error));
                }
                info!("finished with a result");
                Ok(Outcome::Done {
                    result: Some(output),
                })
            }
            None => {
                info!("finished without a result");
                Ok(Outcome::Done { result: None })
            }
        }
    }

    /// Register the commands declared in the manifest.
    ///
    /// A missing manifest is a no-op. An unresolvable config directory is
    /// downgraded to a warning, there is just nowhere to look.
    fn load_extensions(&mut self) -> Result<()> {
        let path = match &self.manifest_path {
            Some(path) => path.clone(),
            None => match config::default_manifest_path() {
                Ok(path) => path,
                Err(error) => {
                    warn!(%error, "cannot resolve the command manifest location");
                    return Ok(());
                }
            },
        };

        let commands = config::load_user_commands(&path)?;
        for command in commands {
            self.registry.register(Box::new(command))?;
        }
        Ok(())
    }

    /// Copy the result to the X selection, then show it.
    fn report(&self, output: &str) -> Result<()> {
        self.clipboard.write(output)?;
        self.ui
            .display_result(&format!("{}\n\n{}", output, RESULT_NOTICE))?;
        Ok(())
    }

    /// Surface `error` once through the UI, then hand it back so the
    /// caller can re-signal it.
    fn fail(&self, error: AppError) -> AppError {
        if let Err(display_error) = self.ui.display_result(&error.user_message()) {
            warn!(%display_error, "could not display the failure");
        }
        error
    }
}

/// Normalize selected text: trim the ends and collapse every internal run
/// of whitespace, newlines and tabs included, to a single space.
///
/// Applying it twice changes nothing, so callers never need to track
/// whether text is already clean.
fn sanitize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
