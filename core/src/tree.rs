//! Live-tree bookkeeping records.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::Backend;
use crate::component::ComponentHost;
use crate::vnode::VNode;

/// Shared handle to a [`RenderedNode`] record.
///
/// Records are shared so a component-initiated update can re-enter
/// reconciliation at its own subtree root; the component side holds only a
/// weak reference.
pub(crate) type RenderedLink<B> = Rc<RefCell<RenderedNode<B>>>;

/// Bookkeeping record pairing a [`VNode`] snapshot with the live node it
/// produced.
///
/// Exactly one record subtree exists per mount point; it mirrors the live
/// display tree. A component record owns no live node of its own; `node`
/// aliases its single child's.
pub(crate) struct RenderedNode<B: Backend> {
    /// Snapshot the next pass diffs against.
    pub(crate) vnode: VNode,
    /// The owned live node; `None` when the subtree rendered to nothing.
    pub(crate) node: Option<B::Node>,
    /// The live node this subtree is attached under.
    pub(crate) parent: B::Node,
    /// Owned child records, in slot order.
    pub(crate) children: Vec<RenderedLink<B>>,
    /// Present when this record is a component boundary.
    pub(crate) component: Option<ComponentHost>,
}

impl<B: Backend> RenderedNode<B> {
    pub(crate) fn link(
        vnode: VNode,
        node: Option<B::Node>,
        parent: B::Node,
        children: Vec<RenderedLink<B>>,
        component: Option<ComponentHost>,
    ) -> RenderedLink<B> {
        Rc::new(RefCell::new(Self {
            vnode,
            node,
            parent,
            children,
            component,
        }))
    }
}

impl<B: Backend> fmt::Debug for RenderedNode<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedNode")
            .field("vnode", &self.vnode.kind())
            .field("node", &self.node)
            .field("children", &self.children.len())
            .field("component", &self.component)
            .finish()
    }
}
