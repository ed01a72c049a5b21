use rustc_hash::FxHashMap;

use super::host::{EventSource, FieldId, ListenerId, Subscription};

/// An [`EventSource`] that only tracks who listens to what.
///
/// Hosts look up subscribers here when an event arrives and route it to those fields.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: FxHashMap<ListenerId, (FieldId, Subscription)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Fields subscribed to `kind`, in subscription order, without duplicates.
    pub fn subscribers(&self, kind: Subscription) -> Vec<FieldId> {
        let mut matching: Vec<(ListenerId, FieldId)> = self
            .listeners
            .iter()
            .filter(|(_, (_, k))| *k == kind)
            .map(|(id, (field, _))| (*id, *field))
            .collect();
        matching.sort_unstable_by_key(|(id, _)| *id);

        let mut out: Vec<FieldId> = Vec::with_capacity(matching.len());
        for (_, field) in matching {
            if !out.contains(&field) {
                out.push(field);
            }
        }
        out
    }

    pub fn is_subscribed(&self, field: FieldId, kind: Subscription) -> bool {
        self.listeners
            .values()
            .any(|(f, k)| *f == field && *k == kind)
    }

    /// Number of live subscriptions held by `field`.
    pub fn count_for(&self, field: FieldId) -> usize {
        self.listeners.values().filter(|(f, _)| *f == field).count()
    }

    /// Number of live host-wide (move/up) subscriptions across all fields.
    pub fn global_count(&self) -> usize {
        self.listeners
            .values()
            .filter(|(_, k)| k.is_global())
            .count()
    }
}

impl EventSource for ListenerRegistry {
    fn subscribe(&mut self, field: FieldId, kind: Subscription) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, (field, kind));
        tracing::trace!(?field, ?kind, listener = id.0, "subscribe");
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        if self.listeners.remove(&listener).is_none() {
            tracing::warn!(listener = listener.0, "unsubscribe of unknown listener");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/listeners.rs"]
mod tests;
