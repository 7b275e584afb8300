//! Context-sensitive actions for the current X11 text selection.
//!
//! xact reads the selection, filters a registry of predicate-gated
//! commands, lets the user disambiguate through a menu when several
//! apply, runs the winner and copies any textual result back to the
//! selection.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod selector;
pub mod ui;
pub mod x11;
