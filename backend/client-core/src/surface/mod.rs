//! Text surfaces and the clipboard seam.
//!
//! The editor widgets themselves (highlighting, cursor handling) live outside
//! this crate. Here a surface is just the text it holds, the syntax mode it is
//! configured with, and whether the user may type into it.

use crate::error::ClipboardError;

use std::fmt::{Display, Formatter, Result as FormatResult};

/// Syntax mode a surface is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxMode {
    Jsx,
    Xml,
}

impl Display for SyntaxMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            SyntaxMode::Jsx => write!(formatter, "jsx"),
            SyntaxMode::Xml => write!(formatter, "xml"),
        }
    }
}

/// In-memory text surface with `value`/`set_value` semantics.
///
/// `read_only` only restricts user edits; programmatic writes through
/// [`TextBuffer::set_value`] always succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    mode: SyntaxMode,
    read_only: bool,
}

impl TextBuffer {
    pub fn new(mode: SyntaxMode, read_only: bool) -> Self {
        Self {
            text: String::new(),
            mode,
            read_only,
        }
    }

    /// Editable surface for React source.
    pub fn source() -> Self {
        Self::new(SyntaxMode::Jsx, false)
    }

    /// Read-only surface for converted Webflow markup.
    pub fn output() -> Self {
        Self::new(SyntaxMode::Xml, true)
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn set_value(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Apply a user edit. Returns `false` and leaves the text alone on a
    /// read-only surface.
    pub fn user_edit(&mut self, text: impl Into<String>) -> bool {
        if self.read_only {
            return false;
        }
        self.text = text.into();
        true
    }

    /// True when the content is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn mode(&self) -> SyntaxMode {
        self.mode
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

/// System clipboard write primitive.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
