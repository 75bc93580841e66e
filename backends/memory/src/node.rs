//! The in-memory node store.

use core::fmt;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::rc::Rc;

use ripple_core::{Backend, DisplayNode, Error, Event, EventHandler, PropValue, TEXT_VALUE};

/// Allocator handle for in-memory display trees.
///
/// Cloning shares the id counter, so every node created through related
/// handles carries a distinct id.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    ids: Rc<Cell<u64>>,
}

impl MemoryBackend {
    /// Creates a fresh backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached container element to mount trees into.
    #[must_use]
    pub fn create_root(&self) -> MemoryNode {
        MemoryNode::element(self.next_id(), "root")
    }

    fn next_id(&self) -> u64 {
        let id = self.ids.get();
        self.ids.set(id + 1);
        id
    }
}

impl Backend for MemoryBackend {
    type Node = MemoryNode;

    fn create_element(&self, tag: &str) -> Result<Self::Node, Error> {
        Ok(MemoryNode::element(self.next_id(), tag))
    }

    fn create_text(&self, value: &str) -> Result<Self::Node, Error> {
        Ok(MemoryNode::text(self.next_id(), value))
    }
}

#[derive(Debug, Clone)]
enum Content {
    Element { tag: String },
    Text { value: String },
}

#[derive(Debug)]
struct Inner {
    id: u64,
    content: Content,
    properties: BTreeMap<String, PropValue>,
    listeners: Vec<(String, EventHandler)>,
    children: Vec<MemoryNode>,
}

/// Shared handle to one in-memory display node.
#[derive(Clone)]
pub struct MemoryNode {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryNode {
    fn element(id: u64, tag: &str) -> Self {
        Self::with_content(id, Content::Element { tag: tag.to_owned() })
    }

    fn text(id: u64, value: &str) -> Self {
        Self::with_content(id, Content::Text { value: value.to_owned() })
    }

    fn with_content(id: u64, content: Content) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                id,
                content,
                properties: BTreeMap::new(),
                listeners: Vec::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Id assigned at creation; stable for the node's lifetime.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.inner.borrow().id
    }

    /// Returns `true` when both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Element tag, or `None` for text nodes.
    #[must_use]
    pub fn tag(&self) -> Option<String> {
        match &self.inner.borrow().content {
            Content::Element { tag } => Some(tag.clone()),
            Content::Text { .. } => None,
        }
    }

    /// Returns `true` for text nodes.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.inner.borrow().content, Content::Text { .. })
    }

    /// Text payload, or `None` for elements.
    #[must_use]
    pub fn text_value(&self) -> Option<String> {
        match &self.inner.borrow().content {
            Content::Text { value } => Some(value.clone()),
            Content::Element { .. } => None,
        }
    }

    /// Number of attached children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// The child at `index`, if present.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Self> {
        self.inner.borrow().children.get(index).cloned()
    }

    /// Snapshot of the current children, in order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.inner.borrow().children.clone()
    }

    /// Number of listeners registered for the given event kind.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|(kind, _)| kind == event)
            .count()
    }

    /// Synchronously invokes every listener registered for `event`.
    ///
    /// Returns the number of listeners invoked. Listeners are snapshotted
    /// before the first call, so a handler that re-renders and swaps
    /// listeners out does not affect the current dispatch.
    pub fn dispatch(&self, event: &str) -> usize {
        let handlers: Vec<EventHandler> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|(kind, _)| kind == event)
            .map(|(_, handler)| handler.clone())
            .collect();

        let payload = Event::new(event);
        for handler in &handlers {
            handler.invoke(&payload);
        }
        handlers.len()
    }

    /// Concatenated text of this subtree: the payload for text nodes, the
    /// `textContent` property (when assigned) or the children's text for
    /// elements.
    #[must_use]
    pub fn text_content(&self) -> String {
        let inner = self.inner.borrow();
        match &inner.content {
            Content::Text { value } => value.clone(),
            Content::Element { .. } => {
                if let Some(text) = inner.properties.get("textContent") {
                    return text.display_text();
                }
                inner
                    .children
                    .iter()
                    .map(Self::text_content)
                    .collect()
            }
        }
    }

    /// Indented snapshot of the subtree, one node per line.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(&mut out, 0);
        out
    }

    fn outline_into(&self, out: &mut String, depth: usize) {
        let inner = self.inner.borrow();
        let indent = "  ".repeat(depth);
        match &inner.content {
            Content::Text { value } => {
                let _ = writeln!(out, "{indent}{value:?}");
            }
            Content::Element { tag } => {
                let _ = write!(out, "{indent}<{tag}");
                for (name, value) in &inner.properties {
                    let _ = write!(out, " {name}={:?}", value.display_text());
                }
                let _ = writeln!(out, ">");
                for child in &inner.children {
                    child.outline_into(out, depth + 1);
                }
            }
        }
    }

    fn position_of(&self, child: &Self) -> Option<usize> {
        self.inner
            .borrow()
            .children
            .iter()
            .position(|candidate| candidate.ptr_eq(child))
    }
}

impl DisplayNode for MemoryNode {
    fn append_child(&self, child: &Self) {
        self.inner.borrow_mut().children.push(child.clone());
    }

    fn remove_child(&self, child: &Self) {
        let Some(index) = self.position_of(child) else {
            tracing::warn!(parent = self.id(), child = child.id(), "removed child is not attached");
            return;
        };
        self.inner.borrow_mut().children.remove(index);
    }

    fn replace_child(&self, next: &Self, prev: &Self) {
        let Some(index) = self.position_of(prev) else {
            tracing::warn!(parent = self.id(), child = prev.id(), "replaced child is not attached");
            return;
        };
        self.inner.borrow_mut().children[index] = next.clone();
    }

    fn set_property(&self, name: &str, value: &PropValue) {
        let mut inner = self.inner.borrow_mut();
        if name == TEXT_VALUE {
            if let Content::Text { value: payload } = &mut inner.content {
                *payload = value.display_text();
                return;
            }
        }
        inner.properties.insert(name.to_owned(), value.clone());
    }

    fn clear_property(&self, name: &str) {
        let mut inner = self.inner.borrow_mut();
        if name == TEXT_VALUE {
            if let Content::Text { value } = &mut inner.content {
                value.clear();
                return;
            }
        }
        inner.properties.remove(name);
    }

    fn property(&self, name: &str) -> Option<PropValue> {
        self.inner.borrow().properties.get(name).cloned()
    }

    fn add_listener(&self, event: &str, handler: &EventHandler) {
        self.inner
            .borrow_mut()
            .listeners
            .push((event.to_owned(), handler.clone()));
    }

    fn remove_listener(&self, event: &str, handler: &EventHandler) {
        let mut inner = self.inner.borrow_mut();
        let Some(index) = inner
            .listeners
            .iter()
            .position(|(kind, candidate)| kind == event && candidate.ptr_eq(handler))
        else {
            tracing::warn!(node = inner.id, event, "removed listener is not registered");
            return;
        };
        inner.listeners.remove(index);
    }
}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        match &inner.content {
            Content::Element { tag } => write!(f, "MemoryNode#{}(<{tag}>)", inner.id),
            Content::Text { value } => write!(f, "MemoryNode#{}({value:?})", inner.id),
        }
    }
}
