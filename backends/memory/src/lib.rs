//! In-memory display tree backend for Ripple.
//!
//! Every node is a plain record held behind a shared handle, so tests and
//! demos can mount trees, dispatch events, and inspect exactly what the
//! reconciler did (node identity included) without any runtime beneath.

pub use crate::node::{MemoryBackend, MemoryNode};

mod node;

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::{Backend, DisplayNode, EventHandler, PropValue, TEXT_VALUE};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn elements_track_children_in_order() {
        let backend = MemoryBackend::new();
        let parent = backend.create_element("ul").expect("ul should be created");
        let first = backend.create_element("li").expect("li should be created");
        let second = backend.create_element("li").expect("li should be created");

        parent.append_child(&first);
        parent.append_child(&second);
        assert_eq!(parent.child_count(), 2);
        assert!(parent.child(0).expect("first child").ptr_eq(&first));

        parent.remove_child(&first);
        assert_eq!(parent.child_count(), 1);
        assert!(parent.child(0).expect("remaining child").ptr_eq(&second));
    }

    #[test]
    fn replace_preserves_the_slot() {
        let backend = MemoryBackend::new();
        let parent = backend.create_element("div").expect("div should be created");
        let a = backend.create_element("span").expect("span should be created");
        let b = backend.create_element("p").expect("p should be created");
        let c = backend.create_element("em").expect("em should be created");

        parent.append_child(&a);
        parent.append_child(&b);
        parent.replace_child(&c, &a);

        assert_eq!(parent.child_count(), 2);
        assert!(parent.child(0).expect("slot 0").ptr_eq(&c));
        assert!(parent.child(1).expect("slot 1").ptr_eq(&b));
    }

    #[test]
    fn text_nodes_expose_their_payload() {
        let backend = MemoryBackend::new();
        let text = backend.create_text("tick").expect("text should be created");
        assert_eq!(text.text_value(), Some("tick".to_owned()));

        text.set_property(TEXT_VALUE, &PropValue::from("tock"));
        assert_eq!(text.text_value(), Some("tock".to_owned()));
    }

    #[test]
    fn dispatch_reaches_matching_listeners_only() {
        let backend = MemoryBackend::new();
        let button = backend.create_element("button").expect("button should be created");
        let clicks = Rc::new(Cell::new(0));

        let count = clicks.clone();
        let on_click = EventHandler::new(move |_| count.set(count.get() + 1));
        button.add_listener("click", &on_click);
        button.add_listener("keydown", &EventHandler::new(|_| panic!("wrong listener")));

        assert_eq!(button.dispatch("click"), 1);
        assert_eq!(clicks.get(), 1);

        button.remove_listener("click", &on_click);
        assert_eq!(button.dispatch("click"), 0);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn listeners_removed_by_identity_not_kind() {
        let backend = MemoryBackend::new();
        let node = backend.create_element("a").expect("a should be created");
        let keep = EventHandler::new(|_| {});
        let discard = EventHandler::new(|_| {});

        node.add_listener("click", &keep);
        node.add_listener("click", &discard);
        node.remove_listener("click", &discard);

        assert_eq!(node.listener_count("click"), 1);
    }

    #[test]
    fn outline_snapshots_the_subtree() {
        let backend = MemoryBackend::new();
        let root = backend.create_element("div").expect("div should be created");
        let label = backend.create_text("hello").expect("text should be created");
        root.append_child(&label);
        root.set_property("title", &PropValue::from("greeting"));

        assert_eq!(root.outline(), "<div title=\"greeting\">\n  \"hello\"\n");
    }
}
