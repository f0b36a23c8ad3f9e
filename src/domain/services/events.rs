#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::KeyboardEnhancementFlags;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

/// Terminals only report modifiers on Enter once escape codes are
/// disambiguated, which Shift+Enter relies on.
pub fn keyboard_enhancement_flags() -> KeyboardEnhancementFlags {
    return KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES;
}

fn handle_key(keyevent: KeyEvent) -> Option<Event> {
    if keyevent.kind == KeyEventKind::Release {
        return None;
    }

    // Shift+Enter types a newline instead of submitting.
    if keyevent.code == KeyCode::Enter && keyevent.modifiers.contains(KeyModifiers::SHIFT) {
        return Some(Event::KeyboardCharInput(Input {
            key: Key::Enter,
            ctrl: false,
            alt: false,
        }));
    }

    match keyevent.into() {
        Input { key: Key::Down, .. } => {
            return Some(Event::UIScrollDown());
        }
        Input { key: Key::Up, .. } => {
            return Some(Event::UIScrollUp());
        }
        Input {
            key: Key::PageDown, ..
        } => {
            return Some(Event::UIScrollPageDown());
        }
        Input {
            key: Key::PageUp, ..
        } => {
            return Some(Event::UIScrollPageUp());
        }
        Input {
            key: Key::Char('d'),
            ctrl: true,
            ..
        } => {
            return Some(Event::UIScrollPageDown());
        }
        Input {
            key: Key::Char('u'),
            ctrl: true,
            ..
        } => {
            return Some(Event::UIScrollPageUp());
        }
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => {
            return Some(Event::KeyboardCTRLC());
        }
        Input {
            key: Key::Enter, ..
        } => {
            return Some(Event::KeyboardEnter());
        }
        input => {
            return Some(Event::KeyboardCharInput(input));
        }
    }
}

fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => {
            return Some(Event::KeyboardPaste(text));
        }
        CrosstermEvent::Resize(_, _) => {
            return Some(Event::UIResize());
        }
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::ScrollUp => {
                return Some(Event::UIScrollUp());
            }
            MouseEventKind::ScrollDown => {
                return Some(Event::UIScrollDown());
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) => {
            return handle_key(keyevent);
        }
        _ => return None,
    }
}

/// Merges terminal input with events posted by the actions worker.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::warn!(error = ?err, "Failed to read terminal event");
                        None
                    }
                    None => None
                },
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
