use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    // Core actions (translated to core::Action by the event loop)
    ForceQuit, // Ctrl+C, quits from any mode
    Submit,
    Escape,

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    FocusNext, // Tab: toggle search bar / result list focus
    ScrollUp,
    ScrollDown,
    MouseMove(u16, u16),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                // Windows delivers key-release events too; only act on press
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    // Regular key handling
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                    (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Moved => {
                    Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
