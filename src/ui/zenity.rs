//! zenity frontend.
//!
//! All interaction happens through zenity dialog windows: a `--list`
//! dialog for the menu and an `--info` dialog for results. Suits setups
//! without dmenu and mouse-driven use.

use std::process::Command;

use tracing::debug;

use super::{MenuChoice, Ui, UiError};

const DIALOG_TITLE: &str = "xact";
const DIALOG_WIDTH: &str = "600";
const DIALOG_HEIGHT: &str = "400";

/// Frontend backed entirely by zenity dialogs.
pub struct ZenityUi {
    program: String,
}

impl ZenityUi {
    pub fn new() -> Self {
        Self {
            program: "zenity".to_string(),
        }
    }

    /// Use a different program in place of zenity.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ZenityUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for ZenityUi {
    fn display_menu(&self, options: &[String]) -> Result<MenuChoice, UiError> {
        let output = Command::new(&self.program)
            .args([
                "--list",
                "--title",
                DIALOG_TITLE,
                "--hide-header",
                "--column",
                "Command",
                "--width",
                DIALOG_WIDTH,
                "--height",
                DIALOG_HEIGHT,
            ])
            .args(options)
            .output()
            .map_err(|source| UiError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            debug!(status = %output.status, "menu dismissed");
            return Ok(MenuChoice::Cancelled);
        }

        let choice = String::from_utf8(output.stdout).map_err(|_| UiError::NonUtf8Output {
            program: self.program.clone(),
        })?;
        Ok(MenuChoice::Picked(choice.trim().to_string()))
    }

    fn display_result(&self, text: &str) -> Result<(), UiError> {
        show_info(&self.program, text)
    }
}

/// Present `text` in an information dialog. Shared by both frontends.
///
/// Only failure to start the program is an error. A non-zero exit just
/// means the user closed the dialog with escape instead of the OK button,
/// and the information was on screen either way.
pub(crate) fn show_info(program: &str, text: &str) -> Result<(), UiError> {
    let status = Command::new(program)
        .args([
            "--info",
            "--title",
            DIALOG_TITLE,
            "--width",
            DIALOG_WIDTH,
            "--height",
            DIALOG_HEIGHT,
            "--text",
            text,
        ])
        .status()
        .map_err(|source| UiError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        debug!(%status, "result dialog dismissed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_passes_options_as_rows() {
        // `echo` prints its arguments, so the chosen "row" is the whole
        // argument list; enough to prove the options reach the program.
        let ui = ZenityUi::with_program("echo");
        let options = vec!["Alpha".to_string(), "Beta".to_string()];
        match ui.display_menu(&options).unwrap() {
            MenuChoice::Picked(line) => assert!(line.ends_with("Alpha Beta")),
            other => panic!("Expected Picked, got {:?}", other),
        }
    }

    #[test]
    fn test_menu_dismissal_is_cancelled() {
        let ui = ZenityUi::with_program("false");
        let choice = ui.display_menu(&["Alpha".to_string()]).unwrap();
        assert_eq!(choice, MenuChoice::Cancelled);
    }

    #[test]
    fn test_menu_spawn_failure() {
        let ui = ZenityUi::with_program("nonexistent-dialog-program-24680");
        let err = ui.display_menu(&["Alpha".to_string()]).unwrap_err();
        assert!(matches!(err, UiError::Spawn { .. }));
    }

    #[test]
    fn test_show_info_spawn_failure() {
        let err = show_info("nonexistent-dialog-program-24680", "hello").unwrap_err();
        match err {
            UiError::Spawn { program, .. } => {
                assert_eq!(program, "nonexistent-dialog-program-24680");
            }
            other => panic!("Expected Spawn error, got {:?}", other),
        }
    }

    #[test]
    fn test_show_info_succeeds_when_program_runs() {
        assert!(show_info("true", "hello").is_ok());
    }

    #[test]
    fn test_show_info_tolerates_dismissal() {
        // Closing the dialog with escape makes zenity exit non-zero; the
        // text was still shown.
        assert!(show_info("false", "hello").is_ok());
    }
}
