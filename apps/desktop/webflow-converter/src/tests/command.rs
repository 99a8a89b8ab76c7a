use crate::command::{CommandError, PasteBuffer, ShellCommand};

use client_core::controller::Event;

use std::path::PathBuf;

#[test]
fn given_button_commands_when_parsed_then_map_to_one_event_each() {
    let cases = [
        ("convert", Event::Convert),
        ("copy", Event::CopyOutput),
        ("example", Event::LoadExample),
        ("  CONVERT  ", Event::Convert),
    ];

    for (line, expected) in cases {
        let command = ShellCommand::parse(line).unwrap().unwrap();
        assert_eq!(command.event(), Some(expected), "line {line:?}");
    }
}

#[test]
fn given_blank_line_when_parsed_then_none() {
    assert_eq!(ShellCommand::parse("   "), Ok(None));
}

#[test]
fn given_load_with_path_when_parsed_then_keeps_spaces_in_path() {
    let command = ShellCommand::parse("load  my components/App.jsx ").unwrap();

    assert_eq!(
        command,
        Some(ShellCommand::Load(PathBuf::from("my components/App.jsx")))
    );
    assert_eq!(command.unwrap().event(), None);
}

#[test]
fn given_load_without_path_when_parsed_then_missing_argument() {
    assert!(matches!(
        ShellCommand::parse("load"),
        Err(CommandError::MissingArgument { command: "load", .. })
    ));
}

#[test]
fn given_unknown_verb_when_parsed_then_unknown_error_echoes_input() {
    let err = ShellCommand::parse("frobnicate now").unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unknown command 'frobnicate now' (type 'help' for the list)"
    );
}

#[test]
fn given_quit_aliases_when_parsed_then_quit() {
    assert_eq!(ShellCommand::parse("exit"), Ok(Some(ShellCommand::Quit)));
    assert_eq!(ShellCommand::parse("quit"), Ok(Some(ShellCommand::Quit)));
}

#[test]
fn given_pasted_lines_when_terminated_then_joined_without_terminator() {
    let mut buffer = PasteBuffer::new();

    assert!(!buffer.push("<div>"));
    assert!(!buffer.push("  <p>hi</p>"));
    assert!(!buffer.push("</div>"));
    assert!(buffer.push(". "));

    assert_eq!(buffer.finish(), "<div>\n  <p>hi</p>\n</div>");
}

#[test]
fn given_line_containing_dot_when_pushed_then_kept() {
    let mut buffer = PasteBuffer::new();

    assert!(!buffer.push("a.b"));
    assert!(!buffer.push(" ."), "Leading whitespace makes it content");
    assert!(buffer.push("."));

    assert_eq!(buffer.finish(), "a.b\n .");
}
