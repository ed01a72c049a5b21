//! The seams between a numeric field and the environment hosting it.
//!
//! A field never touches a concrete UI toolkit. It drives its two representations through
//! [`FieldView`] and (un)subscribes from host events through [`EventSource`]. The host is
//! responsible for delivering the subscribed events back as [`crate::core::FieldEvent`]s.

use slotmap::new_key_type;

new_key_type! {
    /// Identity of one numeric field, used to route subscribed events back to it.
    pub struct FieldId;
}

/// One of the two visual representations of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The read-only text that can be clicked or dragged.
    Label,
    /// The pre-existing editable input the field wraps.
    Input,
}

/// The host-side representations of a single field.
///
/// The label is created and styled by the host; the input already exists before the field
/// wraps it.
pub trait FieldView {
    fn input_text(&self) -> String;

    fn set_input_text(&mut self, text: &str);

    fn set_label_text(&mut self, text: &str);

    /// Showing a part restores whatever display style it had before it was first hidden.
    fn set_visible(&mut self, part: Part, visible: bool);

    fn focus_input(&mut self);

    /// Removes focus from the input.
    ///
    /// Implementations must not report a blur back for this call; the field runs its blur
    /// transition itself.
    fn blur_input(&mut self);

    /// Removes the label from the host. Called once, on destroy.
    fn detach_label(&mut self);
}

/// What a field listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subscription {
    /// Pointer pressed on the field's label.
    LabelPointerDown,
    /// The field's input lost focus.
    InputBlur,
    /// A key was pressed in the field's input.
    InputKeyPress,
    /// Pointer moved anywhere in the host.
    PointerMove,
    /// Pointer released anywhere in the host.
    PointerUp,
}

impl Subscription {
    /// Host-wide subscriptions, only held while a drag session is open.
    pub fn is_global(self) -> bool {
        matches!(self, Subscription::PointerMove | Subscription::PointerUp)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

pub trait EventSource {
    fn subscribe(&mut self, field: FieldId, kind: Subscription) -> ListenerId;

    fn unsubscribe(&mut self, listener: ListenerId);
}

/// The host-wide move/up subscriptions held for the lifetime of one drag session.
///
/// Not `Clone`: there is exactly one owner, and [`PointerCapture::release`] consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct PointerCapture {
    on_move: ListenerId,
    on_up: ListenerId,
}

impl PointerCapture {
    pub fn acquire(events: &mut dyn EventSource, field: FieldId) -> Self {
        let on_up = events.subscribe(field, Subscription::PointerUp);
        let on_move = events.subscribe(field, Subscription::PointerMove);
        Self { on_move, on_up }
    }

    pub fn release(self, events: &mut dyn EventSource) {
        events.unsubscribe(self.on_up);
        events.unsubscribe(self.on_move);
    }
}
