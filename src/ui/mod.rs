//! User-facing presentation.
//!
//! Two interchangeable frontends: a dmenu launcher bar and zenity dialog
//! windows. Both answer the same two questions, "which command?" and
//! "here is the result", behind the [`Ui`] trait so the application never
//! cares which one is wired in.

mod dmenu;
mod zenity;

pub use dmenu::DmenuUi;
pub use zenity::ZenityUi;

use std::io;

use clap::ValueEnum;
use thiserror::Error;

/// Which picker frontend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UiKind {
    /// dmenu bar for the menu, zenity dialog for results.
    Dmenu,
    /// zenity dialogs for both the menu and results.
    Zenity,
}

/// The user's answer to a disambiguation menu.
///
/// Dismissing the menu is an ordinary outcome, not an error: the frontends
/// translate their "user pressed escape" signal into [`MenuChoice::Cancelled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// The user picked this entry.
    Picked(String),
    /// The user dismissed the menu without picking anything.
    Cancelled,
}

/// Errors raised while driving a frontend program.
#[derive(Debug, Error)]
pub enum UiError {
    /// The frontend program could not be started.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the frontend's pipes failed.
    #[error("failed talking to '{program}': {source}")]
    Pipe {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The frontend printed a choice that is not UTF-8.
    #[error("'{program}' produced non-UTF-8 output")]
    NonUtf8Output { program: String },
}

/// A picker frontend.
pub trait Ui {
    /// Present `options` and wait for the user to pick one or dismiss
    /// the menu. Options are displayed in the given order.
    fn display_menu(&self, options: &[String]) -> Result<MenuChoice, UiError>;

    /// Present `text` to the user. Used for both results and failures;
    /// the outcome of the dialog itself is not consulted.
    fn display_result(&self, text: &str) -> Result<(), UiError>;
}

/// Build the frontend for the given kind.
pub fn build(kind: UiKind) -> Box<dyn Ui> {
    match kind {
        UiKind::Dmenu => Box::new(DmenuUi::new()),
        UiKind::Zenity => Box::new(ZenityUi::new()),
    }
}
