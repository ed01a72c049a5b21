use crate::core::event::{KeyCode, KeyEvent, Modifiers, PointerEvent};
use crate::core::geom::Pos;

/// A terminal event reduced to what the numeric field host cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Mouse(MouseInput),
    FocusLost,
    Resize(u16, u16),
    Ignored,
}

/// Primary-button mouse activity. Other buttons and the wheel map to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseKind {
    Down,
    Up,
    Drag,
    Moved,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseInput {
    pub kind: MouseKind,
    pub column: u16,
    pub row: u16,
    pub modifiers: Modifiers,
}

impl MouseInput {
    pub fn pos(&self) -> Pos {
        Pos::new(f64::from(self.column), f64::from(self.row))
    }

    pub fn pointer(&self) -> PointerEvent {
        PointerEvent {
            pos: self.pos(),
            modifiers: self.modifiers,
        }
    }
}

pub fn into_terminal_event(event: crossterm::event::Event) -> TerminalEvent {
    match event {
        crossterm::event::Event::Key(key) => match into_key_event(key) {
            Some(key) => TerminalEvent::Key(key),
            None => TerminalEvent::Ignored,
        },
        crossterm::event::Event::Mouse(mouse) => TerminalEvent::Mouse(into_mouse_input(mouse)),
        crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
        crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
        _ => TerminalEvent::Ignored,
    }
}

/// Key releases carry no input and map to `None`.
pub fn into_key_event(event: crossterm::event::KeyEvent) -> Option<KeyEvent> {
    if event.kind == crossterm::event::KeyEventKind::Release {
        return None;
    }
    Some(KeyEvent {
        code: into_key_code(event.code),
        modifiers: into_modifiers(event.modifiers),
    })
}

fn into_modifiers(mods: crossterm::event::KeyModifiers) -> Modifiers {
    Modifiers {
        shift: mods.contains(crossterm::event::KeyModifiers::SHIFT),
        ctrl: mods.contains(crossterm::event::KeyModifiers::CONTROL),
        alt: mods.contains(crossterm::event::KeyModifiers::ALT),
    }
}

fn into_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        _ => KeyCode::Unknown,
    }
}

pub fn into_mouse_input(event: crossterm::event::MouseEvent) -> MouseInput {
    MouseInput {
        kind: into_mouse_kind(event.kind),
        column: event.column,
        row: event.row,
        modifiers: into_modifiers(event.modifiers),
    }
}

fn into_mouse_kind(kind: crossterm::event::MouseEventKind) -> MouseKind {
    use crossterm::event::{MouseButton, MouseEventKind};

    match kind {
        MouseEventKind::Down(MouseButton::Left) => MouseKind::Down,
        MouseEventKind::Up(MouseButton::Left) => MouseKind::Up,
        MouseEventKind::Drag(MouseButton::Left) => MouseKind::Drag,
        MouseEventKind::Moved => MouseKind::Moved,
        _ => MouseKind::Other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
