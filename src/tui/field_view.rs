//! Terminal rendition of one numeric field.
//!
//! The label and the input share a row. The view remembers where each was last drawn so
//! the app can hit-test mouse events against them.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::core::event::{KeyCode, KeyEvent};
use crate::core::geom::Pos;
use crate::field::{FieldView, Part};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalFieldView {
    name: String,
    buffer: String,
    /// Cursor position in chars.
    cursor: usize,
    label: String,
    label_visible: bool,
    input_visible: bool,
    focused: bool,
    attached: bool,
    label_area: Option<Rect>,
    input_area: Option<Rect>,
}

impl TerminalFieldView {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let buffer: String = text.into();
        Self {
            name: name.into(),
            cursor: buffer.chars().count(),
            buffer,
            label: String::new(),
            label_visible: true,
            input_visible: true,
            focused: false,
            attached: true,
            label_area: None,
            input_area: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_label_shown(&self) -> bool {
        self.attached && self.label_visible
    }

    pub fn is_input_shown(&self) -> bool {
        self.input_visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn label_width(&self) -> u16 {
        u16::try_from(self.label.width()).unwrap_or(u16::MAX)
    }

    pub fn buffer_width(&self) -> u16 {
        u16::try_from(self.buffer.width()).unwrap_or(u16::MAX)
    }

    /// Display column of the cursor relative to the start of the input.
    pub fn cursor_column(&self) -> u16 {
        let before: String = self.buffer.chars().take(self.cursor).collect();
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }

    pub fn set_label_area(&mut self, area: Option<Rect>) {
        self.label_area = area;
    }

    pub fn set_input_area(&mut self, area: Option<Rect>) {
        self.input_area = area;
    }

    pub fn label_hit(&self, pos: Pos) -> bool {
        self.is_label_shown() && self.label_area.is_some_and(|r| rect_contains(r, pos))
    }

    pub fn input_hit(&self, pos: Pos) -> bool {
        self.input_visible && self.input_area.is_some_and(|r| rect_contains(r, pos))
    }

    /// Line editing for the focused input. Returns whether the key was used.
    pub fn apply_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.ctrl && !key.modifiers.alt => {
                let at = self.byte_index(self.cursor);
                self.buffer.insert(at, ch);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.buffer.remove(at);
            }
            KeyCode::Delete => {
                if self.cursor >= self.buffer.chars().count() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.buffer.remove(at);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.buffer.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.chars().count(),
            _ => return false,
        }
        true
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(i, _)| i)
    }
}

fn rect_contains(rect: Rect, pos: Pos) -> bool {
    let (x, y) = (pos.x, pos.y);
    x >= f64::from(rect.x)
        && x < f64::from(rect.x) + f64::from(rect.width)
        && y >= f64::from(rect.y)
        && y < f64::from(rect.y) + f64::from(rect.height)
}

impl FieldView for TerminalFieldView {
    fn input_text(&self) -> String {
        self.buffer.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.chars().count();
    }

    fn set_label_text(&mut self, text: &str) {
        self.label = text.to_string();
    }

    fn set_visible(&mut self, part: Part, visible: bool) {
        match part {
            Part::Label => self.label_visible = visible,
            Part::Input => self.input_visible = visible,
        }
        if !visible {
            match part {
                Part::Label => self.label_area = None,
                Part::Input => self.input_area = None,
            }
        }
    }

    fn focus_input(&mut self) {
        self.focused = true;
        self.cursor = self.buffer.chars().count();
    }

    fn blur_input(&mut self) {
        self.focused = false;
    }

    fn detach_label(&mut self) {
        self.attached = false;
        self.label_area = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/field_view.rs"]
mod tests;
