//! Command parsing for the input line
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `@filename` → Load a source file and classify it
//! - `@@` → Load clipboard
//! - anything else → Classify the typed text

use crate::app::AppEvent;

/// Commands that can be parsed from the input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Classify(String),
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse the input line into a Command
///
/// Lines starting with `:` are system commands and `@` loads a source.
/// Any other non-blank line is source text; it is classified as typed,
/// leading and trailing whitespace included.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    // Check for empty input first
    if trimmed.is_empty() {
        return Command::Unknown(trimmed.to_string());
    }

    // Handle system commands starting with ':'
    if let Some(cmd) = trimmed.strip_prefix(':') {
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Classify(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between the input line and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Classify(text) => AppEvent::Classify(text),
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
