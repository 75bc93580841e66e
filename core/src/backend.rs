//! The rendering-target abstraction the engine mutates.
//!
//! The engine never talks to a concrete runtime; it drives any display tree
//! offering node creation plus the child/property/listener operations below.
//! Mutation operations are infallible at this boundary: a backend that can
//! fail internally (a browser DOM, say) logs the failure and keeps going, so
//! one bad node never stops the rest of a pass from being applied.

use core::fmt;

use crate::error::Error;
use crate::event::EventHandler;
use crate::props::PropValue;

/// A handle to one live display node.
///
/// Handles are cheap to clone and refer to the same underlying node.
pub trait DisplayNode: Clone + fmt::Debug + 'static {
    /// Appends `child` as the last child of this node.
    fn append_child(&self, child: &Self);

    /// Detaches `child` from this node.
    fn remove_child(&self, child: &Self);

    /// Swaps `prev` for `next` in place, preserving sibling order.
    fn replace_child(&self, next: &Self, prev: &Self);

    /// Assigns a named property on the node.
    fn set_property(&self, name: &str, value: &PropValue);

    /// Nulls out a previously assigned property.
    fn clear_property(&self, name: &str);

    /// Reads a named property back, when the backend can represent it.
    fn property(&self, name: &str) -> Option<PropValue>;

    /// Registers an event listener of the given kind.
    fn add_listener(&self, event: &str, handler: &EventHandler);

    /// Removes a listener previously registered with the same kind and the
    /// same handler identity.
    fn remove_listener(&self, event: &str, handler: &EventHandler);
}

/// Factory for live display nodes.
pub trait Backend: Clone + fmt::Debug + 'static {
    /// The node handle type this backend produces.
    type Node: DisplayNode;

    /// Creates a tagged element node.
    ///
    /// # Errors
    ///
    /// Backend-specific creation failures (e.g. a rejected tag name).
    fn create_element(&self, tag: &str) -> Result<Self::Node, Error>;

    /// Creates a text node carrying the given value.
    ///
    /// # Errors
    ///
    /// Backend-specific creation failures.
    fn create_text(&self, value: &str) -> Result<Self::Node, Error>;
}
