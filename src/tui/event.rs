use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events. Views interpret `InputChar` themselves, so
/// the same key can be a shortcut in the list and plain text in the form.
pub enum TuiEvent {
    /// Ctrl+C - quits from any view.
    ForceQuit,
    Escape,
    /// Enter.
    Submit,
    InputChar(char),
    Backspace,
    CursorUp,
    CursorDown,
    /// Tab - next form field.
    FocusNext,
    /// Shift+Tab - previous form field.
    FocusPrev,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            // Kitty-protocol terminals also report key releases; only act on press.
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
