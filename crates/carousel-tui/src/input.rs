use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use carousel_core::WheelEvent;

/// Keyboard action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    None,
}

/// Pointer interaction in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Primary button pressed at column
    Press { column: u16, row: u16 },
    /// Pointer moved with the primary button held
    DragTo { column: u16, row: u16 },
    /// Primary button released
    Release { column: u16, row: u16 },
    /// Pointer moved with no button held
    Hover { column: u16, row: u16 },
    Wheel(WheelEvent),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding pointer action
///
/// Terminals report one wheel notch per event, so each notch becomes a
/// one-line wheel delta.
pub fn handle_mouse_event(mouse: MouseEvent) -> PointerAction {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerAction::Press { column, row },
        MouseEventKind::Drag(MouseButton::Left) => PointerAction::DragTo { column, row },
        MouseEventKind::Up(MouseButton::Left) => PointerAction::Release { column, row },
        MouseEventKind::Moved => PointerAction::Hover { column, row },
        MouseEventKind::ScrollDown => PointerAction::Wheel(WheelEvent::lines(0.0, 1.0)),
        MouseEventKind::ScrollUp => PointerAction::Wheel(WheelEvent::lines(0.0, -1.0)),
        _ => PointerAction::None,
    }
}
