//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::ui::UiKind;

/// Run a context-sensitive action on the current X11 text selection.
#[derive(Debug, Parser)]
#[command(name = "xact", version, about)]
pub struct Cli {
    /// Picker frontend to use.
    #[arg(long, value_enum, default_value = "dmenu")]
    pub ui: UiKind,

    /// Load user commands from this manifest instead of the default
    /// `<config dir>/xact/commands.toml`.
    #[arg(long, value_name = "FILE")]
    pub commands: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["xact"]).unwrap();
        assert_eq!(cli.ui, UiKind::Dmenu);
        assert_eq!(cli.commands, None);
    }

    #[test]
    fn test_ui_flag_selects_zenity() {
        let cli = Cli::try_parse_from(["xact", "--ui", "zenity"]).unwrap();
        assert_eq!(cli.ui, UiKind::Zenity);
    }

    #[test]
    fn test_rejects_unknown_ui() {
        assert!(Cli::try_parse_from(["xact", "--ui", "gtk"]).is_err());
    }

    #[test]
    fn test_commands_flag() {
        let cli = Cli::try_parse_from(["xact", "--commands", "/tmp/custom.toml"]).unwrap();
        assert_eq!(cli.commands, Some(PathBuf::from("/tmp/custom.toml")));
    }
}
