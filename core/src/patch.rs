//! The property/listener synchronizer.
//!
//! Property names are partitioned by a fixed convention: a name beginning
//! with `on` declares an event listener whose kind is the lowercased
//! remainder; every other name is a plain property assigned directly on the
//! live node. The update path removes every previous listener and nulls
//! every previous plain property before applying the next set, so stale
//! handlers and removed properties never linger.

use crate::backend::DisplayNode;
use crate::props::{PropValue, Props};

const LISTENER_PREFIX: &str = "on";

/// Returns the event kind declared by a listener-style prop name.
fn listener_event(name: &str) -> Option<String> {
    name.strip_prefix(LISTENER_PREFIX)
        .filter(|rest| !rest.is_empty())
        .map(str::to_lowercase)
}

/// Applies the prop/listener delta between `prev` and `next` onto `node`.
///
/// With `prev` absent only the "set" half runs, which is the instantiate
/// path. Repeated calls with no `prev` re-attach listeners; the reconciler
/// calls this once per pass per node.
pub(crate) fn update_display_properties<N: DisplayNode>(
    node: &N,
    prev: Option<&Props>,
    next: &Props,
) {
    if let Some(prev) = prev {
        for (name, value) in prev.iter() {
            match listener_event(name) {
                Some(event) => {
                    if let PropValue::Handler(handler) = value {
                        node.remove_listener(&event, handler);
                    }
                }
                None => node.clear_property(name),
            }
        }
    }

    for (name, value) in next.iter() {
        match listener_event(name) {
            Some(event) => {
                if let PropValue::Handler(handler) = value {
                    node.add_listener(&event, handler);
                } else {
                    tracing::warn!(name, "listener-style prop without a handler value; skipped");
                }
            }
            None => node.set_property(name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventHandler;
    use crate::props;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every operation the synchronizer performs.
    #[derive(Clone, Debug, Default)]
    struct RecordingNode {
        ops: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNode {
        fn ops(&self) -> Vec<String> {
            self.ops.borrow().clone()
        }

        fn push(&self, op: String) {
            self.ops.borrow_mut().push(op);
        }
    }

    impl DisplayNode for RecordingNode {
        fn append_child(&self, _child: &Self) {}
        fn remove_child(&self, _child: &Self) {}
        fn replace_child(&self, _next: &Self, _prev: &Self) {}

        fn set_property(&self, name: &str, value: &PropValue) {
            self.push(format!("set {name}={}", value.display_text()));
        }

        fn clear_property(&self, name: &str) {
            self.push(format!("clear {name}"));
        }

        fn property(&self, _name: &str) -> Option<PropValue> {
            None
        }

        fn add_listener(&self, event: &str, _handler: &EventHandler) {
            self.push(format!("listen {event}"));
        }

        fn remove_listener(&self, event: &str, _handler: &EventHandler) {
            self.push(format!("unlisten {event}"));
        }
    }

    #[test]
    fn mount_path_only_sets() {
        let node = RecordingNode::default();
        let next = props! {
            "textContent" => "hi",
            "onClick" => EventHandler::new(|_| {}),
        };

        update_display_properties(&node, None, &next);

        assert_eq!(node.ops(), vec!["listen click", "set textContent=hi"]);
    }

    #[test]
    fn update_path_removes_before_applying() {
        let node = RecordingNode::default();
        let handler = EventHandler::new(|_| {});
        let prev = props! { "title" => "a", "onClick" => handler.clone() };
        let next = props! { "title" => "b", "onKeyDown" => EventHandler::new(|_| {}) };

        update_display_properties(&node, Some(&prev), &next);

        assert_eq!(
            node.ops(),
            vec!["unlisten click", "clear title", "listen keydown", "set title=b"]
        );
    }

    #[test]
    fn listener_names_are_lowercased_past_the_prefix() {
        assert_eq!(listener_event("onClick"), Some("click".to_owned()));
        assert_eq!(listener_event("onKeyDown"), Some("keydown".to_owned()));
        assert_eq!(listener_event("on"), None);
        assert_eq!(listener_event("textContent"), None);
    }

    #[test]
    fn listener_style_prop_without_handler_is_skipped() {
        let node = RecordingNode::default();
        let next = props! { "onClick" => "not a handler" };

        update_display_properties(&node, None, &next);

        assert!(node.ops().is_empty());
    }
}
