//! Headless field view for tests and non-visual hosts.

use super::host::{FieldView, Part};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlessView {
    pub input_text: String,
    pub label_text: String,
    pub input_visible: bool,
    pub label_visible: bool,
    pub input_focused: bool,
    pub label_attached: bool,
}

impl HeadlessView {
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            label_text: String::new(),
            input_visible: true,
            label_visible: true,
            input_focused: false,
            label_attached: true,
        }
    }

    pub fn is_visible(&self, part: Part) -> bool {
        match part {
            Part::Label => self.label_visible,
            Part::Input => self.input_visible,
        }
    }
}

impl FieldView for HeadlessView {
    fn input_text(&self) -> String {
        self.input_text.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input_text.clear();
        self.input_text.push_str(text);
    }

    fn set_label_text(&mut self, text: &str) {
        self.label_text.clear();
        self.label_text.push_str(text);
    }

    fn set_visible(&mut self, part: Part, visible: bool) {
        match part {
            Part::Label => self.label_visible = visible,
            Part::Input => self.input_visible = visible,
        }
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn blur_input(&mut self) {
        self.input_focused = false;
    }

    fn detach_label(&mut self) {
        self.label_attached = false;
    }
}
