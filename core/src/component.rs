//! The stateful component contract and its update plumbing.

use core::any::{TypeId, type_name};
use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::props::{Props, State};
use crate::vnode::VNode;

/// Behavior implemented by every stateful component.
///
/// A component is a pure function of its current props and state plus a set
/// of optional lifecycle hooks. The update capability arrives as an explicit
/// construction parameter; nothing is wired onto instances after the fact.
pub trait Component: 'static {
    /// Constructs an instance from its initial props and its [`Scope`].
    fn create(props: Props, scope: Scope) -> Self
    where
        Self: Sized;

    /// State for a freshly constructed instance; empty unless overridden.
    fn initial_state(&self) -> State {
        State::new()
    }

    /// Produces the desired subtree for the current props and state.
    ///
    /// Returning `Ok(None)` signals that the component renders nothing.
    ///
    /// # Errors
    ///
    /// Element-construction failures propagate to the top-level render call.
    fn render(&self, props: &Props, state: &State) -> Result<Option<VNode>, Error>;

    /// Called once after the component's subtree is first attached.
    fn did_mount(&mut self) {}

    /// Called after an update pass whose subtree did not unmount.
    fn did_update(&mut self, prev_props: &Props, prev_state: &State) {
        let _ = (prev_props, prev_state);
    }

    /// Called when the component's subtree is removed.
    fn will_unmount(&mut self) {}
}

/// Clonable constructor record for a component class.
///
/// Identity is the component's [`TypeId`]; the reconciler compares specs to
/// decide between updating in place and replacing wholesale.
#[derive(Clone)]
pub struct ComponentSpec {
    type_id: TypeId,
    name: &'static str,
    construct: Rc<dyn Fn(Props, Scope) -> Box<dyn Component>>,
}

impl ComponentSpec {
    /// Builds the spec for a component class.
    #[must_use]
    pub fn of<C: Component>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: type_name::<C>(),
            construct: Rc::new(|props, scope| Box::new(C::create(props, scope))),
        }
    }

    /// Returns the component's type name, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn construct(&self, props: Props, scope: Scope) -> Box<dyn Component> {
        (self.construct)(props, scope)
    }
}

impl fmt::Debug for ComponentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentSpec").field(&self.name).finish()
    }
}

impl PartialEq for ComponentSpec {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

pub(crate) type UpdateRequest = Box<dyn FnMut(State) -> Result<(), Error>>;

/// A component's handle onto its own mounted subtree.
///
/// The scope owns the shared state cell and the update request bound by the
/// reconciler once the component's record exists. Cloning is cheap; handlers
/// created during `render` capture clones.
#[derive(Clone, Default)]
pub struct Scope {
    state: Rc<RefCell<State>>,
    request: Rc<RefCell<Option<UpdateRequest>>>,
}

impl Scope {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state.borrow().clone()
    }

    /// Merges `partial` into the current state (keys in `partial` win) and
    /// synchronously re-renders this component's subtree.
    ///
    /// Returns once the triggered pass has completed. Before the reconciler
    /// binds the update request (i.e. during first instantiation) only the
    /// merge happens.
    ///
    /// # Errors
    ///
    /// Failures raised by the triggered render pass.
    pub fn set_state(&self, partial: State) -> Result<(), Error> {
        let previous = self.state.borrow().clone();
        self.state.borrow_mut().merge(partial);

        let Some(mut request) = self.request.borrow_mut().take() else {
            tracing::trace!("state merged before an update request was bound");
            return Ok(());
        };
        let result = request(previous);
        *self.request.borrow_mut() = Some(request);
        result
    }

    pub(crate) fn seed_state(&self, state: State) {
        *self.state.borrow_mut() = state;
    }

    pub(crate) fn bind_request(&self, request: UpdateRequest) {
        *self.request.borrow_mut() = Some(request);
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("state", &self.state.borrow())
            .field("bound", &self.request.borrow().is_some())
            .finish()
    }
}

/// The reconciler-owned half of a mounted component: the instance plus the
/// props and state it is currently rendered with.
pub(crate) struct ComponentHost {
    pub(crate) instance: Box<dyn Component>,
    pub(crate) props: Props,
    pub(crate) scope: Scope,
    pub(crate) name: &'static str,
}

impl ComponentHost {
    pub(crate) fn render(&self) -> Result<Option<VNode>, Error> {
        let state = self.scope.state();
        self.instance
            .render(&self.props, &state)
            .map_err(|source| Error::RenderContract {
                component: self.name,
                source: Box::new(source),
            })
    }
}

impl fmt::Debug for ComponentHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentHost")
            .field("component", &self.name)
            .field("props", &self.props)
            .finish()
    }
}
