//! Bulk setup: one numeric field per target input.

use slotmap::SlotMap;

use crate::core::event::FieldEvent;
use crate::field::{EventSource, FieldId, FieldOptions, FieldView, NumericField};

/// Owns the numeric fields created over a set of target inputs.
///
/// Fields are independent. The controller only keeps them alive and lets the host route
/// subscribed events back to the right one.
#[derive(Debug)]
pub struct DraggableNumbers<V> {
    fields: SlotMap<FieldId, NumericField<V>>,
    /// Field ids in the order the targets were given.
    order: Vec<FieldId>,
}

impl<V: FieldView> DraggableNumbers<V> {
    /// Creates a field for every target, last target first.
    pub fn new(targets: Vec<V>, options: FieldOptions, events: &mut dyn EventSource) -> Self {
        let mut fields = SlotMap::with_capacity_and_key(targets.len());
        let mut order = Vec::with_capacity(targets.len());

        for view in targets.into_iter().rev() {
            let id =
                fields.insert_with_key(|id| NumericField::new(id, view, options, &mut *events));
            order.push(id);
        }
        order.reverse();

        tracing::info!(count = order.len(), "numeric fields initialised");
        Self { fields, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Field ids in target order.
    pub fn ids(&self) -> &[FieldId] {
        &self.order
    }

    pub fn get(&self, id: FieldId) -> Option<&NumericField<V>> {
        self.fields.get(id)
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut NumericField<V>> {
        self.fields.get_mut(id)
    }

    /// Fields in target order.
    pub fn iter(&self) -> impl Iterator<Item = &NumericField<V>> {
        self.order.iter().filter_map(|id| self.fields.get(*id))
    }

    /// Delivers `event` to one field. Returns `false` if the field no longer exists.
    pub fn dispatch(
        &mut self,
        id: FieldId,
        event: &FieldEvent,
        events: &mut dyn EventSource,
    ) -> bool {
        let Some(field) = self.fields.get_mut(id) else {
            tracing::warn!(?id, "event for unknown field");
            return false;
        };
        field.handle(event, events);
        true
    }

    /// Ends every open drag session, e.g. when the host loses the pointer.
    pub fn cancel_drags(&mut self, events: &mut dyn EventSource) {
        for field in self.fields.values_mut() {
            field.cancel_drag(events);
        }
    }

    /// Tears one field down and returns its view.
    pub fn destroy(&mut self, id: FieldId, events: &mut dyn EventSource) -> Option<V> {
        let field = self.fields.remove(id)?;
        self.order.retain(|other| *other != id);
        Some(field.destroy(events))
    }

    /// Tears every field down, returning the views in target order.
    pub fn destroy_all(mut self, events: &mut dyn EventSource) -> Vec<V> {
        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .filter_map(|id| self.fields.remove(id))
            .map(|field| field.destroy(events))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/controller.rs"]
mod tests;
