//! Text rendering of an [`AppState`] snapshot.
//!
//! Rendering is a pure function of the snapshot and preferences; nothing here
//! touches controller state.

use client_core::config::UiPreferences;
use client_core::controller::AppState;
use client_core::surface::TextBuffer;

use common::{NoticeStyle, StatusNotice};

use std::fmt::Write as _;

const EMPTY_PLACEHOLDER: &str = "  (empty)";
const ANSI_RESET: &str = "\x1b[0m";

/// Render both editors, the convert trigger state and the status notice.
///
/// `color` enables 24-bit ANSI colouring of the notice.
pub fn render(state: &AppState, preferences: &UiPreferences, color: bool) -> String {
    let mut out = String::new();

    render_surface(&mut out, "React", &state.source, preferences.line_numbers);
    render_surface(&mut out, "Webflow", &state.output, preferences.line_numbers);

    if state.converting {
        out.push_str("[convert disabled: request in flight]\n");
    }

    if let Some(notice) = &state.status {
        out.push_str(&render_notice(notice, color));
        out.push('\n');
    }

    out
}

/// `[OK] message` or `[ERROR] message`, optionally painted with the notice style.
pub fn render_notice(notice: &StatusNotice, color: bool) -> String {
    let tag = if notice.is_error { "ERROR" } else { "OK" };
    let text = format!("[{tag}] {}", notice.message);

    match (color, paint_prefix(notice.style())) {
        (true, Some(prefix)) => format!("{prefix} {text} {ANSI_RESET}"),
        _ => text,
    }
}

fn render_surface(out: &mut String, title: &str, buffer: &TextBuffer, line_numbers: bool) {
    let access = if buffer.is_read_only() {
        ", read-only"
    } else {
        ""
    };
    let _ = writeln!(out, "── {title} ({}{access}) ──", buffer.mode());

    if buffer.value().is_empty() {
        let _ = writeln!(out, "{EMPTY_PLACEHOLDER}");
        return;
    }

    let lines: Vec<&str> = buffer.value().split('\n').collect();
    let width = lines.len().to_string().len();

    for (index, line) in lines.iter().enumerate() {
        if line_numbers {
            let _ = writeln!(out, "{:>width$} | {line}", index + 1);
        } else {
            let _ = writeln!(out, "{line}");
        }
    }
}

/// ANSI escape selecting the style's foreground and background colours.
fn paint_prefix(style: NoticeStyle) -> Option<String> {
    let (fr, fg, fb) = parse_hex(style.foreground)?;
    let (br, bg, bb) = parse_hex(style.background)?;
    Some(format!("\x1b[38;2;{fr};{fg};{fb};48;2;{br};{bg};{bb}m"))
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
