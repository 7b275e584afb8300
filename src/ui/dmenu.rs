//! dmenu frontend.
//!
//! dmenu reads menu entries from stdin, one per line, prints the chosen
//! line to stdout and exits non-zero when the menu is dismissed. Results
//! still go through a zenity dialog because dmenu has no way to show one.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use super::{zenity, MenuChoice, Ui, UiError};

const MENU_PROMPT: &str = "select command:";

/// Menu frontend backed by the dmenu launcher bar.
pub struct DmenuUi {
    program: String,
    args: Vec<String>,
    info_program: String,
}

impl DmenuUi {
    pub fn new() -> Self {
        Self {
            program: "dmenu".to_string(),
            args: vec![
                "-i".to_string(),
                "-p".to_string(),
                MENU_PROMPT.to_string(),
            ],
            info_program: "zenity".to_string(),
        }
    }

    /// Use a different menu program and arguments in place of dmenu.
    pub fn with_menu_program(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            info_program: "zenity".to_string(),
        }
    }
}

impl Default for DmenuUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for DmenuUi {
    fn display_menu(&self, options: &[String]) -> Result<MenuChoice, UiError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| UiError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // The user can dismiss the menu before the options are fully
            // written; the exit status below already covers that case.
            if let Err(source) = stdin.write_all(options.join("\n").as_bytes()) {
                if source.kind() != io::ErrorKind::BrokenPipe {
                    // Take the menu down and reap it before bailing out.
                    drop(stdin);
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(UiError::Pipe {
                        program: self.program.clone(),
                        source,
                    });
                }
            }
        }

        let output = child.wait_with_output().map_err(|source| UiError::Pipe {
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
        zenity::show_info(&self.info_program, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take_first_line() -> DmenuUi {
        // `head -n 1` reads the piped options and prints the first, which
        // mimics picking the top entry.
        DmenuUi::with_menu_program("head", vec!["-n".to_string(), "1".to_string()])
    }

    #[test]
    fn test_menu_returns_chosen_line() {
        let ui = take_first_line();
        let options = vec!["Alpha".to_string(), "Beta".to_string()];
        let choice = ui.display_menu(&options).unwrap();
        assert_eq!(choice, MenuChoice::Picked("Alpha".to_string()));
    }

    #[test]
    fn test_menu_pipes_options_in_order() {
        // `tail -n 1` picks the last entry instead.
        let ui = DmenuUi::with_menu_program("tail", vec!["-n".to_string(), "1".to_string()]);
        let options = vec![
            "Alpha".to_string(),
            "Beta".to_string(),
            "Gamma".to_string(),
        ];
        let choice = ui.display_menu(&options).unwrap();
        assert_eq!(choice, MenuChoice::Picked("Gamma".to_string()));
    }

    #[test]
    fn test_menu_dismissal_is_cancelled() {
        // `false` exits 1 immediately, which is dmenu's escape signal.
        let ui = DmenuUi::with_menu_program("false", vec![]);
        let choice = ui.display_menu(&["Alpha".to_string()]).unwrap();
        assert_eq!(choice, MenuChoice::Cancelled);
    }

    #[test]
    fn test_menu_survives_options_larger_than_the_pipe() {
        // `false` dies without reading, so a write past the pipe buffer
        // fails mid-stream. That must still resolve to a plain dismissal
        // with the child reaped, not a hang or a pipe error.
        let ui = DmenuUi::with_menu_program("false", vec![]);
        let options = vec!["x".repeat(256 * 1024), "y".to_string()];
        let choice = ui.display_menu(&options).unwrap();
        assert_eq!(choice, MenuChoice::Cancelled);
    }

    #[test]
    fn test_menu_spawn_failure() {
        let ui = DmenuUi::with_menu_program("nonexistent-menu-program-13579", vec![]);
        let err = ui.display_menu(&["Alpha".to_string()]).unwrap_err();
        match err {
            UiError::Spawn { program, .. } => {
                assert_eq!(program, "nonexistent-menu-program-13579");
            }
            other => panic!("Expected Spawn error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_uses_dmenu() {
        let ui = DmenuUi::default();
        assert_eq!(ui.program, "dmenu");
        assert_eq!(ui.info_program, "zenity");
    }
}
