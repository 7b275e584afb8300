//! Commands shipped with xact.
//!
//! Registration order is the menu order: timestamp parsing, translation,
//! URL opening, web search, then the editor. "Google search" accepts
//! everything, which makes it the fallback when nothing else applies.

use std::borrow::Cow;
use std::env;
use std::path::Path;
use std::process::Command as SystemCommand;
use std::time::Duration;

use chrono::DateTime;
use tracing::debug;

use super::{Command, CommandError};

/// All built-in commands, boxed, in registration order.
pub fn all() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(UnixTimestamp),
        Box::new(Translate),
        Box::new(OpenUrl),
        Box::new(WebSearch),
        Box::new(OpenInEditor::new()),
    ]
}

/// True when the selection is a plain run of ASCII digits.
fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Renders a numeric selection as a UTC date and time.
pub struct UnixTimestamp;

impl Command for UnixTimestamp {
    fn unique_name(&self) -> &str {
        "Parse unix timestamp"
    }

    fn accepts(&self, text: &str) -> bool {
        is_numeric(text)
    }

    fn run(&self, text: &str) -> Result<Option<String>, CommandError> {
        let seconds: i64 = text.parse().map_err(|_| {
            CommandError::InvalidInput(format!("'{text}' is not a unix timestamp"))
        })?;
        let datetime = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            CommandError::InvalidInput(format!("timestamp {seconds} is out of range"))
        })?;
        Ok(Some(format!("{} UTC", datetime.format("%Y-%m-%d %H:%M:%S"))))
    }
}

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(10);
const TARGET_LANG_VAR: &str = "XACT_TARGET_LANG";
const DEFAULT_TARGET_LANG: &str = "en";

/// Translates the selection via the public Google translate endpoint.
///
/// The source language is auto-detected; the target comes from
/// `$XACT_TARGET_LANG` and defaults to English.
pub struct Translate;

impl Command for Translate {
    fn unique_name(&self) -> &str {
        "Google translate"
    }

    fn accepts(&self, text: &str) -> bool {
        // Bare numbers are timestamps, not prose.
        !is_numeric(text)
    }

    fn run(&self, text: &str) -> Result<Option<String>, CommandError> {
        let target = target_language();
        let url = translate_url(text, &target);
        debug!(language = %target, "requesting translation");

        let client = reqwest::blocking::Client::builder()
            .timeout(TRANSLATE_TIMEOUT)
            .build()?;
        let body = client.get(&url).send()?.error_for_status()?.text()?;

        let (source, translated) = parse_translation(&body)?;
        Ok(Some(format!("Translated {source} to {target}: {translated}")))
    }
}

/// Target language for translations, from `$XACT_TARGET_LANG`.
fn target_language() -> String {
    env::var(TARGET_LANG_VAR).unwrap_or_else(|_| DEFAULT_TARGET_LANG.to_string())
}

fn translate_url(text: &str, target: &str) -> String {
    format!(
        "{TRANSLATE_ENDPOINT}?client=gtx&sl=auto&tl={target}&dt=t&q={}",
        urlencoding::encode(text)
    )
}

/// Pull the detected source language and the translated text out of the
/// endpoint's response.
///
/// The body is a nested JSON array: element 0 holds translation segments
/// whose first field is a translated chunk, element 2 names the detected
/// source language.
fn parse_translation(body: &str) -> Result<(String, String), CommandError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| CommandError::UnexpectedResponse(format!("invalid JSON: {e}")))?;

    let segments = value.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
        CommandError::UnexpectedResponse("missing translation segments".to_string())
    })?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(chunk) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(chunk);
        }
    }
    if translated.is_empty() {
        return Err(CommandError::UnexpectedResponse(
            "no translated text".to_string(),
        ));
    }

    let source = value
        .get(2)
        .and_then(|v| v.as_str())
        .unwrap_or("auto")
        .to_string();
    Ok((source, translated))
}

/// Opens an http(s) selection in the default browser.
pub struct OpenUrl;

impl Command for OpenUrl {
    fn unique_name(&self) -> &str {
        "Open URL"
    }

    fn accepts(&self, text: &str) -> bool {
        text.starts_with("http://") || text.starts_with("https://")
    }

    fn run(&self, text: &str) -> Result<Option<String>, CommandError> {
        if let Err(source) = open::that(text) {
            return Err(CommandError::Browser {
                target: text.to_string(),
                source,
            });
        }
        Ok(None)
    }
}

/// Searches the web for the selection.
pub struct WebSearch;

impl Command for WebSearch {
    fn unique_name(&self) -> &str {
        "Google search"
    }

    fn run(&self, text: &str) -> Result<Option<String>, CommandError> {
        let url = search_url(text);
        if let Err(source) = open::that(&url) {
            return Err(CommandError::Browser {
                target: url,
                source,
            });
        }
        Ok(None)
    }
}

fn search_url(text: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(text)
    )
}

/// Opens an absolute or home-relative path in a running emacs server.
///
/// Spawns `emacsclient -c -n`, so the file opens in a new frame and the
/// command returns without waiting for the edit to finish.
#[derive(Debug, Clone)]
pub struct OpenInEditor {
    program: String,
}

impl OpenInEditor {
    pub fn new() -> Self {
        Self {
            program: "emacsclient".to_string(),
        }
    }

    /// Use a different program in place of `emacsclient`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OpenInEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for OpenInEditor {
    fn unique_name(&self) -> &str {
        "Open in emacsclient"
    }

    fn accepts(&self, text: &str) -> bool {
        text.starts_with('/') || text.starts_with('~')
    }

    fn run(&self, text: &str) -> Result<Option<String>, CommandError> {
        let path = expand_home(text, dirs::home_dir().as_deref());
        let status = SystemCommand::new(&self.program)
            .args(["-c", "-n"])
            .arg(path.as_ref())
            .status()
            .map_err(|source| CommandError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(None)
        } else {
            Err(CommandError::ProgramFailed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

/// Replace a leading `~` with the home directory. The shell normally does
/// this, but selected text never went through a shell.
fn expand_home<'a>(text: &'a str, home: Option<&Path>) -> Cow<'a, str> {
    let home = match home {
        Some(home) => home,
        None => return Cow::Borrowed(text),
    };
    if text == "~" {
        return Cow::Owned(home.to_string_lossy().into_owned());
    }
    if let Some(rest) = text.strip_prefix("~/") {
        return Cow::Owned(home.join(rest).to_string_lossy().into_owned());
    }
    Cow::Borrowed(text)
}
