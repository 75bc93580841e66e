//! Browser DOM backend for Ripple.
//!
//! Maps the engine's display-node operations onto `web-sys`. Plain props are
//! assigned as JavaScript properties (not serialized attributes); listener
//! props become real DOM listeners whose closures stay alive for as long as
//! they are registered. The backend is strict in its Rust API but lenient
//! toward the DOM: an individual node operation that the DOM rejects is
//! logged through `tracing` and skipped, so one bad node never aborts the
//! rest of a render pass.

pub use crate::app::{WebApp, WebAppBuilder};
pub use crate::dom::DomRoot;
pub use crate::error::WebError;

mod app;
mod dom;
mod error;

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use ripple_core::{Backend, DisplayNode, Error, Event, EventHandler, PropValue, TEXT_VALUE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

/// Factory for DOM nodes, bound to one document.
#[derive(Debug, Clone)]
pub struct DomBackend {
    document: Document,
}

impl DomBackend {
    /// Creates a backend for the given document.
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Backend for DomBackend {
    type Node = DomNode;

    fn create_element(&self, tag: &str) -> Result<Self::Node, Error> {
        self.document
            .create_element(tag)
            .map(|element| DomNode::new(element.into()))
            .map_err(|error| WebError::from(error).into())
    }

    fn create_text(&self, value: &str) -> Result<Self::Node, Error> {
        Ok(DomNode::new(self.document.create_text_node(value).into()))
    }
}

struct ListenerEntry {
    event: String,
    handler: EventHandler,
    closure: Closure<dyn Fn(web_sys::Event)>,
}

/// Handle to one DOM node plus the listener closures registered on it.
#[derive(Clone)]
pub struct DomNode {
    node: web_sys::Node,
    listeners: Rc<RefCell<Vec<ListenerEntry>>>,
}

impl DomNode {
    /// Wraps a raw DOM node.
    #[must_use]
    pub fn new(node: web_sys::Node) -> Self {
        Self {
            node,
            listeners: Rc::default(),
        }
    }

    /// Returns the underlying DOM node.
    #[must_use]
    pub const fn raw(&self) -> &web_sys::Node {
        &self.node
    }

    fn as_js(&self) -> &JsValue {
        self.node.as_ref()
    }
}

fn prop_to_js(value: &PropValue) -> Option<JsValue> {
    match value {
        PropValue::Text(text) => Some(JsValue::from_str(text)),
        PropValue::Number(number) => Some(JsValue::from_f64(*number)),
        PropValue::Bool(flag) => Some(JsValue::from_bool(*flag)),
        PropValue::Handler(_) => None,
    }
}

impl DisplayNode for DomNode {
    fn append_child(&self, child: &Self) {
        if let Err(error) = self.node.append_child(&child.node) {
            tracing::error!(?error, "failed to append a DOM child");
        }
    }

    fn remove_child(&self, child: &Self) {
        if let Err(error) = self.node.remove_child(&child.node) {
            tracing::error!(?error, "failed to remove a DOM child");
        }
    }

    fn replace_child(&self, next: &Self, prev: &Self) {
        if let Err(error) = self.node.replace_child(&next.node, &prev.node) {
            tracing::error!(?error, "failed to replace a DOM child");
        }
    }

    fn set_property(&self, name: &str, value: &PropValue) {
        if name == TEXT_VALUE && self.node.node_type() == web_sys::Node::TEXT_NODE {
            self.node.set_node_value(Some(&value.display_text()));
            return;
        }
        let Some(js_value) = prop_to_js(value) else {
            tracing::warn!(name, "handler values cannot be assigned as plain properties");
            return;
        };
        if let Err(error) = js_sys::Reflect::set(self.as_js(), &JsValue::from_str(name), &js_value)
        {
            tracing::error!(?error, name, "failed to assign a DOM property");
        }
    }

    fn clear_property(&self, name: &str) {
        if name == TEXT_VALUE && self.node.node_type() == web_sys::Node::TEXT_NODE {
            self.node.set_node_value(None);
            return;
        }
        if let Err(error) =
            js_sys::Reflect::set(self.as_js(), &JsValue::from_str(name), &JsValue::NULL)
        {
            tracing::error!(?error, name, "failed to null a DOM property");
        }
    }

    fn property(&self, name: &str) -> Option<PropValue> {
        let value = js_sys::Reflect::get(self.as_js(), &JsValue::from_str(name)).ok()?;
        if let Some(text) = value.as_string() {
            Some(PropValue::Text(text))
        } else if let Some(number) = value.as_f64() {
            Some(PropValue::Number(number))
        } else {
            value.as_bool().map(PropValue::Bool)
        }
    }

    fn add_listener(&self, event: &str, handler: &EventHandler) {
        let kind = event.to_owned();
        let callback = handler.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            callback.invoke(&Event::new(kind.clone()));
        }) as Box<dyn Fn(web_sys::Event)>);

        if let Err(error) = self
            .node
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            tracing::error!(?error, event, "failed to register a DOM listener");
            return;
        }
        self.listeners.borrow_mut().push(ListenerEntry {
            event: event.to_owned(),
            handler: handler.clone(),
            closure,
        });
    }

    fn remove_listener(&self, event: &str, handler: &EventHandler) {
        let Some(index) = self
            .listeners
            .borrow()
            .iter()
            .position(|entry| entry.event == event && entry.handler.ptr_eq(handler))
        else {
            tracing::warn!(event, "removed listener is not registered");
            return;
        };
        let entry = self.listeners.borrow_mut().remove(index);
        if let Err(error) = self
            .node
            .remove_event_listener_with_callback(event, entry.closure.as_ref().unchecked_ref())
        {
            tracing::error!(?error, event, "failed to remove a DOM listener");
        }
    }
}

impl fmt::Debug for DomNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomNode({})", self.node.node_name())
    }
}
