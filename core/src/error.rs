//! Error types for element construction and rendering.

use thiserror::Error;

/// Errors produced while constructing virtual trees or rendering them.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Error {
    /// `create_element` received a host tag outside the representable set.
    #[error("invalid element type: {0}")]
    InvalidElementType(String),

    /// A component failed while producing its rendered output.
    #[error("component `{component}` failed to render")]
    RenderContract {
        /// Type name of the offending component.
        component: &'static str,
        /// The failure raised inside `render`.
        #[source]
        source: Box<Error>,
    },

    /// The rendered bookkeeping no longer matches the live tree.
    ///
    /// This is a programming error in the embedding code; it is propagated
    /// to the top-level render call and never recovered from.
    #[error("rendered tree is inconsistent with the live tree: {0}")]
    PreconditionViolation(String),

    /// The rendering backend rejected a node operation.
    #[error("backend error: {0}")]
    Backend(String),
}

impl Error {
    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation(message.into())
    }
}
