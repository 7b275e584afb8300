//! xact - context-sensitive actions for the X11 text selection
//!
//! Reads the current selection, offers every command that applies, runs
//! the user's pick and copies any result back to the selection.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use xact::app::{App, Outcome};
use xact::cli::Cli;
use xact::commands::CommandRegistry;
use xact::error::Result;
use xact::x11::Xclip;
use xact::{logging, ui};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is best-effort: the tool still works without a log file.
    if let Err(e) = logging::init() {
        eprintln!("xact: failed to initialize logging: {e:#}");
    }

    let code = match run(cli) {
        Ok(Outcome::Done { .. }) => ExitCode::SUCCESS,
        Ok(Outcome::Cancelled) => {
            info!("cancelled by the user");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "invocation failed");
            eprintln!("xact: {e}");
            ExitCode::FAILURE
        }
    };

    logging::shutdown();
    code
}

/// Build the registry and its collaborators, then run one invocation.
fn run(cli: Cli) -> Result<Outcome> {
    let registry = CommandRegistry::with_builtins()?;
    let frontend = ui::build(cli.ui);
    let xclip = Xclip::new();

    let mut app = App::new(registry, frontend, Box::new(xclip.clone()), Box::new(xclip));
    if let Some(path) = cli.commands {
        app = app.with_manifest_path(path);
    }
    app.run()
}
