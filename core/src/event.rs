//! Event payloads and the handler values carried inside props.

use core::any::type_name;
use core::fmt;
use std::rc::Rc;

/// Payload delivered to event listeners when a backend dispatches an event.
///
/// Handlers are stored inside backend-agnostic props, so the payload carries
/// only the event kind; backends adapt their native event objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: String,
}

impl Event {
    /// Creates an event of the given kind (e.g. `click`).
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Returns the event kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// A cheaply clonable event listener.
///
/// Listener identity is the identity of the underlying allocation; the
/// synchronizer relies on it to remove exactly the listener it previously
/// attached.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&Event)>);

impl EventHandler {
    /// Wraps a closure as an event listener.
    pub fn new(handler: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Invokes the listener with the given event.
    pub fn invoke(&self, event: &Event) {
        (self.0)(event);
    }

    /// Returns `true` when both handles refer to the same listener.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_identity() {
        let handler = EventHandler::new(|_| {});
        let clone = handler.clone();
        assert!(handler.ptr_eq(&clone));

        let other = EventHandler::new(|_| {});
        assert!(!handler.ptr_eq(&other));
    }

    #[test]
    fn invoke_passes_the_event_through() {
        let seen = Rc::new(Cell::new(false));
        let flag = seen.clone();
        let handler = EventHandler::new(move |event| {
            assert_eq!(event.kind(), "click");
            flag.set(true);
        });
        handler.invoke(&Event::new("click"));
        assert!(seen.get());
    }
}
