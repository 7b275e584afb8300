//! X11 selection access through the external `xclip` program.
//!
//! xact talks to the X server the same way a shell user would: `xclip -o`
//! reads the current primary selection, `xclip -i` replaces it. Keeping
//! this behind traits lets the application run against fakes in tests.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

/// Errors raised while talking to the selection helper program.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The helper program could not be started.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the helper's pipes failed.
    #[error("failed talking to '{program}': {source}")]
    Pipe {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The helper ran but reported failure, typically because no X server
    /// is reachable.
    #[error("'{program}' exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },

    /// The selection holds bytes that are not UTF-8.
    #[error("the current selection is not valid UTF-8 text")]
    NonUtf8,
}

/// Reads the text the user currently has selected.
pub trait SelectionSource {
    fn read(&self) -> Result<String, SelectionError>;
}

/// Receives the textual result of a command run.
pub trait ClipboardSink {
    fn write(&self, text: &str) -> Result<(), SelectionError>;
}

/// Both halves of selection access, backed by `xclip`.
#[derive(Debug, Clone)]
pub struct Xclip {
    program: String,
}

impl Xclip {
    pub fn new() -> Self {
        Self {
            program: "xclip".to_string(),
        }
    }

    /// Use a different program in place of `xclip`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSource for Xclip {
    fn read(&self) -> Result<String, SelectionError> {
        let output = Command::new(&self.program)
            .arg("-o")
            .output()
            .map_err(|source| SelectionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SelectionError::Failed {
                program: self.program.clone(),
                status: output.status,
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| SelectionError::NonUtf8)?;
        debug!(bytes = text.len(), "read X selection");
        Ok(text)
    }
}

impl ClipboardSink for Xclip {
    fn write(&self, text: &str) -> Result<(), SelectionError> {
        let mut child = Command::new(&self.program)
            .arg("-i")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| SelectionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A broken pipe means the helper quit early; its exit status
            // below is the authoritative failure signal.
            if let Err(source) = stdin.write_all(text.as_bytes()) {
                if source.kind() != io::ErrorKind::BrokenPipe {
                    drop(stdin);
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SelectionError::Pipe {
                        program: self.program.clone(),
                        source,
                    });
                }
            }
        }

        // xclip forks a child to own the selection, so this returns promptly.
        let status = child.wait().map_err(|source| SelectionError::Pipe {
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(SelectionError::Failed {
                program: self.program.clone(),
                status,
            });
        }
        debug!(bytes = text.len(), "wrote X selection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_spawn_failure() {
        let xclip = Xclip::with_program("nonexistent-xclip-program-98765");
        let err = xclip.read().unwrap_err();
        match err {
            SelectionError::Spawn { program, .. } => {
                assert_eq!(program, "nonexistent-xclip-program-98765");
            }
            other => panic!("Expected Spawn error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_spawn_failure() {
        let xclip = Xclip::with_program("nonexistent-xclip-program-98765");
        let err = xclip.write("hello").unwrap_err();
        assert!(matches!(err, SelectionError::Spawn { .. }));
    }

    #[test]
    fn test_read_reports_helper_failure() {
        // `false` exits 1 without printing anything.
        let xclip = Xclip::with_program("false");
        let err = xclip.read().unwrap_err();
        match err {
            SelectionError::Failed { program, status } => {
                assert_eq!(program, "false");
                assert!(!status.success());
            }
            other => panic!("Expected Failed error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_empty_selection() {
        // `true` exits 0 with empty output; an empty selection is not an error.
        let xclip = Xclip::with_program("true");
        assert_eq!(xclip.read().unwrap(), "");
    }

    #[test]
    fn test_write_tolerates_closed_stdin() {
        // `true` exits without reading its stdin.
        let xclip = Xclip::with_program("true");
        assert!(xclip.write("x").is_ok());
    }

    #[test]
    fn test_write_reports_helper_failure() {
        let xclip = Xclip::with_program("false");
        let err = xclip.write("x").unwrap_err();
        assert!(matches!(err, SelectionError::Failed { .. }));
    }

    #[test]
    fn test_write_larger_than_the_pipe_reports_exit_status() {
        // `false` dies without reading, so a write past the pipe buffer
        // fails mid-stream. The exit status must still come through, with
        // the helper reaped, rather than a hang or a pipe error.
        let xclip = Xclip::with_program("false");
        let err = xclip.write(&"x".repeat(256 * 1024)).unwrap_err();
        assert!(matches!(err, SelectionError::Failed { .. }));
    }

    #[test]
    fn test_default_uses_xclip() {
        let xclip = Xclip::default();
        assert_eq!(xclip.program, "xclip");
    }
}
