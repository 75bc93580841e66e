//! Per-root render handles.

use core::fmt;

use crate::backend::Backend;
use crate::error::Error;
use crate::reconcile::reconcile;
use crate::tree::RenderedLink;
use crate::vnode::VNode;

/// A mounted root: one container node plus the memory of what was last
/// rendered into it.
///
/// Each independent root gets its own handle; two handles never share state,
/// so mounting a second tree elsewhere cannot discard the first root's
/// bookkeeping.
pub struct Renderer<B: Backend> {
    backend: B,
    container: B::Node,
    root: Option<RenderedLink<B>>,
}

impl<B: Backend> Renderer<B> {
    /// Creates a handle for the given container node. Nothing is rendered
    /// until [`Renderer::render`] is called.
    #[must_use]
    pub const fn new(backend: B, container: B::Node) -> Self {
        Self {
            backend,
            container,
            root: None,
        }
    }

    /// Mounts `vnode` into the container, or updates the previously
    /// rendered tree to match it.
    ///
    /// The pass runs to completion, depth-first, before this returns.
    ///
    /// # Errors
    ///
    /// Render failures leave the live tree in a mixed state; callers must
    /// treat it as unusable until a corrective render succeeds.
    pub fn render(&mut self, vnode: VNode) -> Result<(), Error> {
        let prev = self.root.clone();
        let next = reconcile(&self.backend, &self.container, prev, Some(vnode))?;
        self.root = next;
        Ok(())
    }

    /// Removes the rendered tree from the container, firing unmount hooks.
    ///
    /// # Errors
    ///
    /// Failures raised while detaching the tree.
    pub fn unmount(&mut self) -> Result<(), Error> {
        let prev = self.root.take();
        self.root = reconcile(&self.backend, &self.container, prev, None)?;
        Ok(())
    }

    /// Returns `true` while a tree is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// Returns the backend this root renders through.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the container node.
    #[must_use]
    pub const fn container(&self) -> &B::Node {
        &self.container
    }

    /// Returns the live node at the root of the rendered tree, if the tree
    /// rendered to anything.
    #[must_use]
    pub fn root_node(&self) -> Option<B::Node> {
        self.root.as_ref().and_then(|root| root.borrow().node.clone())
    }
}

impl<B: Backend> fmt::Debug for Renderer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("backend", &self.backend)
            .field("container", &self.container)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
