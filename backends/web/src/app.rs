use ripple_core::{Renderer, VNode};

use crate::{DomBackend, DomNode, dom::DomRoot, error::WebError};

/// Builder for [`WebApp`].
#[derive(Debug, Default, Clone)]
pub struct WebAppBuilder {
    root_id: Option<String>,
}

impl WebAppBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { root_id: None }
    }

    /// Sets the DOM element identifier that should host the application.
    #[must_use]
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = Some(id.into());
        self
    }

    /// Finalises the builder and creates a [`WebApp`].
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM root element cannot be found or
    /// initialised.
    pub fn build(self) -> Result<WebApp, WebError> {
        let root = DomRoot::new(self.root_id.as_deref())?;
        root.clear()?;
        let backend = DomBackend::new(root.document().clone());
        let container = DomNode::new(root.element().clone().into());
        Ok(WebApp {
            root,
            renderer: Renderer::new(backend, container),
        })
    }
}

/// Entry point for running Ripple inside the browser: one mounted root
/// driving the document found at startup.
#[derive(Debug)]
pub struct WebApp {
    root: DomRoot,
    renderer: Renderer<DomBackend>,
}

impl WebApp {
    /// Creates an application mounted under a generated host element.
    ///
    /// # Errors
    ///
    /// Returns an error when the DOM is unreachable.
    pub fn new() -> Result<Self, WebError> {
        WebAppBuilder::new().build()
    }

    /// Renders a virtual tree into the root, updating in place on
    /// subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns an error when the render pass fails.
    pub fn render(&mut self, vnode: VNode) -> Result<(), WebError> {
        self.renderer.render(vnode).map_err(WebError::from)
    }

    /// Removes the rendered tree, firing unmount hooks.
    ///
    /// # Errors
    ///
    /// Returns an error when detaching the tree fails.
    pub fn unmount(&mut self) -> Result<(), WebError> {
        self.renderer.unmount().map_err(WebError::from)
    }

    /// Returns the DOM root this application is mounted into.
    #[must_use]
    pub const fn root(&self) -> &DomRoot {
        &self.root
    }

    /// Provides access to the underlying renderer handle.
    #[must_use]
    pub const fn renderer(&self) -> &Renderer<DomBackend> {
        &self.renderer
    }
}
