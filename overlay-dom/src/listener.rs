//! Listener registrations.
//!
//! Every subscription hands back a [`ListenerId`]. The same id is the only
//! way to unsubscribe, so whoever registers a listener keeps its id for the
//! matching removal.

use crate::element::ElementId;
use crate::event::EventKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Viewport-level notifications (resize).
    Window,
    /// Sees every pointer event regardless of target.
    Document,
    /// Sees events targeted at the element or bubbling up from its descendants.
    Element(ElementId),
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    scope: Scope,
    kind: EventKind,
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, scope: Scope, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener { id, scope, kind });
        id
    }

    /// Returns false if the id was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Drop every listener attached to one of the given elements.
    pub fn remove_for_elements(&mut self, elements: &[ElementId]) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| match l.scope {
            Scope::Element(el) => !elements.contains(&el),
            _ => true,
        });
        before - self.listeners.len()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    /// Listeners for `kind` at `scope`, in registration order.
    pub fn matching(&self, scope: Scope, kind: EventKind) -> impl Iterator<Item = ListenerId> + '_ {
        self.listeners
            .iter()
            .filter(move |l| l.scope == scope && l.kind == kind)
            .map(|l| l.id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
