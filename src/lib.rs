//! # Ripple
//!
//! A minimal declarative rendering engine: describe the tree you want,
//! render it, and on later renders the engine applies the smallest set of
//! changes needed to bring the live tree in line.
//!
//! The heavy lifting lives in [`ripple_core`]; this crate re-exports the
//! public API, ships a few demo components, and wires up logging for
//! applications that want it. Rendering targets are pluggable; see the
//! `ripple-memory` and `ripple-web` backends.
//!
//! ```rust
//! use ripple::prelude::*;
//! use ripple_memory::MemoryBackend;
//!
//! let backend = MemoryBackend::new();
//! let container = backend.create_root();
//! let mut renderer = Renderer::new(backend, container);
//!
//! let tree = create_element(
//!     "p",
//!     props! { "textContent" => "Count: 0" },
//!     children![],
//! ).expect("element should build");
//! renderer.render(tree).expect("mount should succeed");
//! ```

pub mod component;
pub mod logging;

pub use ripple_core::{
    Backend, Child, Component, ComponentSpec, DisplayNode, ElementType, Error, Event,
    EventHandler, FunctionComponent, NodeKind, PropValue, Props, Renderer, Scope, State,
    TEXT_VALUE, VNode, create_element,
};

pub use ripple_core::{children, props};

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    pub use ripple_core::{
        Backend, Child, Component, ComponentSpec, DisplayNode, ElementType, Error, Event,
        EventHandler, NodeKind, PropValue, Props, Renderer, Scope, State, VNode, create_element,
    };
    pub use ripple_core::{children, props};

    pub use crate::component::{Counter, Toggle, hello};
}
