//! Terminal commands and their mapping to controller events.

use client_core::controller::Event;

use std::path::PathBuf;

use thiserror::Error;

/// Line that ends a `paste` block.
pub const PASTE_TERMINATOR: &str = ".";

pub const HELP_TEXT: &str = "\
Commands:
  convert        send the React source to the conversion service
  copy           copy the converted Webflow code to the clipboard
  example        load the example component
  load <path>    replace the React source with the contents of a file
  paste          type or paste React source, end with a line holding only '.'
  show           print the editors and status again
  help           print this list
  quit | exit    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Convert,
    Copy,
    Example,
    Load(PathBuf),
    Paste,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{input}' (type 'help' for the list)")]
    Unknown { input: String },

    #[error("'{command}' needs an argument: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "convert" => ShellCommand::Convert,
            "copy" => ShellCommand::Copy,
            "example" => ShellCommand::Example,
            "load" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "load",
                        usage: "load <path>",
                    });
                }
                ShellCommand::Load(PathBuf::from(rest))
            }
            "paste" => ShellCommand::Paste,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => {
                return Err(CommandError::Unknown {
                    input: line.to_string(),
                });
            }
        };

        Ok(Some(command))
    }

    /// Event for commands that map straight onto a controller operation.
    ///
    /// `Load` and `Paste` become [`Event::SourceEdited`] once their text has
    /// been read.
    pub fn event(&self) -> Option<Event> {
        match self {
            ShellCommand::Convert => Some(Event::Convert),
            ShellCommand::Copy => Some(Event::CopyOutput),
            ShellCommand::Example => Some(Event::LoadExample),
            _ => None,
        }
    }
}

/// Accumulates lines typed after `paste` until [`PASTE_TERMINATOR`].
#[derive(Debug, Default)]
pub struct PasteBuffer {
    lines: Vec<String>,
}

impl PasteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line. Returns `true` when `line` was the terminator and the
    /// buffer is complete; the terminator itself is not stored.
    pub fn push(&mut self, line: &str) -> bool {
        if line.trim_end() == PASTE_TERMINATOR {
            return true;
        }
        self.lines.push(line.to_string());
        false
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
