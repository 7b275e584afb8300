//! Applicable-command computation and disambiguation.

use std::fmt;

use tracing::debug;

use crate::commands::{Command, CommandRegistry};
use crate::error::AppError;
use crate::ui::{MenuChoice, Ui};

/// Outcome of the selection phase.
///
/// Dismissing the menu is a normal outcome, so it is a variant here rather
/// than an error.
pub enum Selection<'a> {
    /// Exactly this command should run.
    Chosen(&'a dyn Command),
    /// The user dismissed the menu; nothing should run.
    Cancelled,
}

// `dyn Command` has no `Debug` bound, so render the chosen command by name.
impl fmt::Debug for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Chosen(command) => f
                .debug_tuple("Chosen")
                .field(&command.unique_name())
                .finish(),
            Selection::Cancelled => f.write_str("Cancelled"),
        }
    }
}

/// Pick the command to run for `text`.
///
/// Filters the registry by predicate, in registration order. A single
/// match runs without any prompt; multiple matches go through the UI menu.
///
/// # Errors
///
/// Returns [`AppError::NoApplicableCommand`] when nothing accepts the
/// selection, [`AppError::UnknownMenuChoice`] when the menu answers with
/// an entry that was never offered, and any [`crate::ui::UiError`] raised
/// while driving the menu.
pub fn select_command<'a>(
    text: &str,
    registry: &'a CommandRegistry,
    ui: &dyn Ui,
) -> Result<Selection<'a>, AppError> {
    let applicable: Vec<&dyn Command> = registry.iter().filter(|c| c.accepts(text)).collect();
    debug!(
        applicable = applicable.len(),
        registered = registry.len(),
        "filtered commands"
    );

    match applicable.as_slice() {
        [] => Err(AppError::NoApplicableCommand),
        [only] => Ok(Selection::Chosen(*only)),
        _ => {
            let names: Vec<String> = applicable
                .iter()
                .map(|c| c.unique_name().to_string())
                .collect();
            match ui.display_menu(&names)? {
                MenuChoice::Cancelled => Ok(Selection::Cancelled),
                MenuChoice::Picked(name) => applicable
                    .iter()
                    .copied()
                    .find(|c| c.unique_name() == name)
                    .map(Selection::Chosen)
                    .ok_or(AppError::UnknownMenuChoice(name)),
            }
        }
    }
}
