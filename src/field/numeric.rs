//! Per-field interaction state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Label          -> Label+Dragging  (pointer down on label; acquires move/up capture)
//! Label+Dragging -> Label+Dragging  (pointer move; adjusts value once past the threshold)
//! Label+Dragging -> Edit            (pointer up without a drag; releases capture)
//! Label+Dragging -> Label           (pointer up after a drag, or cancel; releases capture)
//! Edit           -> Label           (blur, or Enter which forces a blur; parses the input)
//! ```

use super::drag::DragSession;
use super::host::{
    EventSource, FieldId, FieldView, ListenerId, Part, PointerCapture, Subscription,
};
use super::modifier::{number_offset, Modifier};
use super::number::{format_number, parse_float};
use super::options::FieldOptions;
use crate::core::event::{FieldEvent, KeyEvent, PointerEvent};

/// Which representation of the field is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Read-only label; clickable and draggable.
    #[default]
    Label,
    /// Editable input with focus.
    Edit,
}

/// Subscriptions taken when a field is created and held until it is destroyed.
const STANDING_SUBSCRIPTIONS: [Subscription; 3] = [
    Subscription::LabelPointerDown,
    Subscription::InputBlur,
    Subscription::InputKeyPress,
];

/// A numeric input turned into a click-to-edit, drag-to-adjust control.
#[derive(Debug)]
pub struct NumericField<V> {
    id: FieldId,
    view: V,
    value: f64,
    mode: Mode,
    drag: Option<DragSession>,
    options: FieldOptions,
    listeners: Vec<ListenerId>,
}

impl<V: FieldView> NumericField<V> {
    /// Wraps `view`, taking the initial value from its input text and switching to label mode.
    pub fn new(
        id: FieldId,
        mut view: V,
        options: FieldOptions,
        events: &mut dyn EventSource,
    ) -> Self {
        let value = parse_float(&view.input_text());
        view.set_label_text(&format_number(value));
        view.set_visible(Part::Input, false);
        view.set_visible(Part::Label, true);

        let listeners = STANDING_SUBSCRIPTIONS
            .iter()
            .map(|kind| events.subscribe(id, *kind))
            .collect();

        tracing::debug!(?id, value, "numeric field attached");

        Self {
            id,
            view,
            value,
            mode: Mode::Label,
            drag: None,
            options,
            listeners,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True while a pointer button is held on the label (the `Label+Dragging` sub-state),
    /// whether or not the threshold has been crossed yet.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn handle(&mut self, event: &FieldEvent, events: &mut dyn EventSource) {
        match event {
            FieldEvent::PointerDown(e) => self.on_pointer_down(e, events),
            FieldEvent::PointerMove(e) => self.on_pointer_move(e),
            FieldEvent::PointerUp(_) => self.on_pointer_up(events),
            FieldEvent::Blur => self.on_blur(),
            FieldEvent::KeyPress(key) => self.on_key_press(key),
        }
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent, events: &mut dyn EventSource) {
        if self.mode == Mode::Edit {
            return;
        }

        // A press without a matching release (e.g. released outside the host) leaves a
        // stale session behind; drop its capture before starting over.
        if let Some(stale) = self.drag.take() {
            stale.finish(events);
        }

        let capture = PointerCapture::acquire(events, self.id);
        self.drag = Some(DragSession::start(event.pos.invert_y(), capture));
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let threshold = self.options.drag_threshold;
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let was_dragged = drag.is_dragged();
        let Some(delta) = drag.step(event.pos.invert_y(), threshold) else {
            return;
        };
        if !was_dragged {
            tracing::debug!(id = ?self.id, "drag started");
        }

        let modifier = Modifier::from_modifiers(event.modifiers);
        let offset = number_offset(delta, modifier, &self.options);
        self.update_number(offset);
        tracing::trace!(id = ?self.id, delta, offset, value = self.value, "drag step");
    }

    pub fn on_pointer_up(&mut self, events: &mut dyn EventSource) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        if !drag.finish(events) {
            self.show_input();
        }
    }

    pub fn on_blur(&mut self) {
        if self.mode != Mode::Edit {
            return;
        }

        let text = self.view.input_text();
        self.value = parse_float(&text);
        if self.value.is_nan() {
            tracing::warn!(id = ?self.id, %text, "input is not a number; value is now NaN");
        }
        self.render();
        self.show_label();
    }

    pub fn on_key_press(&mut self, key: &KeyEvent) {
        if self.mode != Mode::Edit || !key.is_commit() {
            return;
        }
        self.view.blur_input();
        self.on_blur();
    }

    /// Ends an open drag session without the click-to-edit transition.
    pub fn cancel_drag(&mut self, events: &mut dyn EventSource) {
        if let Some(drag) = self.drag.take() {
            drag.finish(events);
            tracing::debug!(id = ?self.id, "drag cancelled");
        }
    }

    /// Releases every subscription, removes the label and hands the view back to the host
    /// with its input showing.
    pub fn destroy(mut self, events: &mut dyn EventSource) -> V {
        self.cancel_drag(events);
        for listener in self.listeners.drain(..) {
            events.unsubscribe(listener);
        }
        self.view.detach_label();
        self.view.set_visible(Part::Input, true);
        tracing::debug!(id = ?self.id, "numeric field destroyed");
        self.view
    }

    fn update_number(&mut self, offset: f64) {
        self.value += offset;
        self.render();
    }

    /// Writes `value` into both representations so they never disagree.
    fn render(&mut self) {
        let text = format_number(self.value);
        self.view.set_input_text(&text);
        self.view.set_label_text(&text);
    }

    fn show_input(&mut self) {
        self.mode = Mode::Edit;
        self.view.set_visible(Part::Input, true);
        self.view.set_visible(Part::Label, false);
        self.view.focus_input();
        tracing::debug!(id = ?self.id, "edit mode");
    }

    fn show_label(&mut self) {
        self.mode = Mode::Label;
        self.view.set_visible(Part::Input, false);
        self.view.set_visible(Part::Label, true);
        tracing::debug!(id = ?self.id, value = self.value, "label mode");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/numeric.rs"]
mod tests;
