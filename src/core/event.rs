//! Host-neutral input events.
//!
//! Frontends translate their native events into these types so the field state machine
//! never depends on a terminal or windowing crate.

use super::geom::Pos;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pos: Pos,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Pos::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn simple(code: KeyCode) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// The key that commits an edit by forcing the input to lose focus.
    pub fn is_commit(&self) -> bool {
        self.code == KeyCode::Enter
    }
}

/// An event delivered to a single numeric field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
    /// Primary button pressed over the label.
    PointerDown(PointerEvent),
    /// Pointer moved anywhere in the host while a drag session is open.
    PointerMove(PointerEvent),
    /// Primary button released anywhere in the host while a drag session is open.
    PointerUp(PointerEvent),
    /// The editable input lost focus.
    Blur,
    /// A key was pressed while the editable input had focus.
    KeyPress(KeyEvent),
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
