//! Line-oriented front-end: reads commands, dispatches controller events and
//! re-renders whenever the controller publishes a new state.

use crate::command::{HELP_TEXT, PasteBuffer, ShellCommand};
use crate::error::ConverterError;
use crate::view::render;

use client_core::config::UiPreferences;
use client_core::controller::{AppState, ControllerHandle, Event};

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Print a fresh rendering every time the controller state changes.
///
/// The task ends when the controller actor stops.
pub fn spawn_renderer(
    mut state_rx: watch::Receiver<AppState>,
    preferences: UiPreferences,
    color: bool,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let state = state_rx.borrow_and_update().clone();
            print!("{}", render(&state, &preferences, color));
        }
        debug!("Renderer stopped");
    })
}

/// Read commands from `input` until `quit` or end of input.
///
/// Before returning, waits for the controller to apply every dispatched
/// event, including a conversion still in flight.
///
/// # Errors
///
/// Returns [`ConverterError`] if reading input fails or the controller actor
/// has stopped.
pub async fn run<R>(
    input: R,
    handle: &ControllerHandle,
    preferences: &UiPreferences,
    color: bool,
) -> Result<(), ConverterError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = next_line(&mut lines).await? {
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            ShellCommand::Quit => {
                info!("Quit requested");
                break;
            }
            ShellCommand::Help => println!("{HELP_TEXT}"),
            ShellCommand::Show => print!("{}", render(&handle.snapshot(), preferences, color)),
            ShellCommand::Load(path) => match std::fs::read_to_string(&path) {
                Ok(text) => {
                    info!("Loaded {} bytes from {}", text.len(), path.display());
                    dispatch(handle, Event::SourceEdited(text)).await?;
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", path.display(), e);
                    println!("Could not read {}: {e}", path.display());
                }
            },
            ShellCommand::Paste => {
                let mut buffer = PasteBuffer::new();
                loop {
                    match next_line(&mut lines).await? {
                        Some(line) => {
                            if buffer.push(&line) {
                                break;
                            }
                        }
                        None => {
                            warn!("Input ended inside paste block; pasted text discarded");
                            return settle(handle).await;
                        }
                    }
                }
                dispatch(handle, Event::SourceEdited(buffer.finish())).await?;
            }
            other => {
                if let Some(event) = other.event() {
                    dispatch(handle, event).await?;
                }
            }
        }
    }

    settle(handle).await
}

async fn next_line<R>(lines: &mut Lines<R>) -> Result<Option<String>, ConverterError>
where
    R: AsyncBufRead + Unpin,
{
    lines.next_line().await.map_err(|e| ConverterError::Converter {
        message: format!("Failed to read input: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

async fn settle(handle: &ControllerHandle) -> Result<(), ConverterError> {
    if handle.snapshot().converting {
        info!("Waiting for the conversion in flight to finish");
    }

    let state = handle.settle().await.map_err(|e| ConverterError::Core {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    debug!(
        "Controller settled (status: {:?})",
        state.status.as_ref().map(|notice| notice.message.as_str())
    );
    Ok(())
}

async fn dispatch(handle: &ControllerHandle, event: Event) -> Result<(), ConverterError> {
    handle.dispatch(event).await.map_err(|e| ConverterError::Core {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
