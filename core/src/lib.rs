//! Core reconciliation engine for the Ripple rendering framework.
//!
//! The engine turns immutable descriptions of a desired UI tree
//! ([`VNode`]s) into real display nodes, and on later passes applies the
//! minimal set of changes needed to bring the live tree in line with a new
//! description. Rendering targets are injected through the [`Backend`] and
//! [`DisplayNode`] traits; the engine never hard-wires a runtime.
//!
//! Execution is strictly single-threaded and synchronous: a render call and
//! every component-triggered update run to completion, depth-first, before
//! control returns. There is no scheduler, no batching, and no keyed child
//! matching; children reconcile by position.

mod backend;
mod component;
mod error;
mod event;
mod macros;
mod patch;
mod props;
mod reconcile;
mod renderer;
mod tree;
mod vnode;

pub use backend::{Backend, DisplayNode};
pub use component::{Component, ComponentSpec, Scope};
pub use error::Error;
pub use event::{Event, EventHandler};
pub use props::{PropValue, Props, State};
pub use renderer::Renderer;
pub use vnode::{Child, ElementType, FunctionComponent, NodeKind, TEXT_VALUE, VNode, create_element};
