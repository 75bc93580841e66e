//! The diff/patch state machine.
//!
//! `reconcile` decides, per node, between mount, unmount, replace and
//! update-in-place, recurses into children depth-first, and keeps the
//! bookkeeping records in step with the live tree. Child matching is purely
//! positional: slot `i` against slot `i`, with no keyed matching, so an
//! insertion at the front updates every shifted sibling in place.

use std::cmp;
use std::rc::Rc;

use crate::backend::{Backend, DisplayNode};
use crate::component::{ComponentHost, ComponentSpec, Scope};
use crate::error::Error;
use crate::patch;
use crate::props::{PropValue, State};
use crate::tree::{RenderedLink, RenderedNode};
use crate::vnode::{NodeKind, TEXT_VALUE, VNode};

/// Diffs a previously rendered record against a new description and applies
/// the minimal live-tree change under `parent`.
pub(crate) fn reconcile<B: Backend>(
    backend: &B,
    parent: &B::Node,
    prev: Option<RenderedLink<B>>,
    next: Option<VNode>,
) -> Result<Option<RenderedLink<B>>, Error> {
    match (prev, next) {
        // An empty slot stays empty.
        (None, None) => Ok(None),
        (None, Some(next)) => {
            tracing::trace!(node = %describe(&next), "mount");
            let record = instantiate(backend, parent, next)?;
            let live = record.borrow().node.clone();
            if let Some(live) = live {
                parent.append_child(&live);
            }
            Ok(Some(record))
        }
        (Some(prev), None) => {
            tracing::trace!(node = %describe(&prev.borrow().vnode), "unmount");
            let live = prev.borrow().node.clone();
            if let Some(live) = live {
                parent.remove_child(&live);
            }
            teardown(&prev);
            Ok(None)
        }
        (Some(prev), Some(next)) => {
            let same_kind = *prev.borrow().vnode.kind() == *next.kind();
            if !same_kind {
                tracing::trace!(
                    from = %describe(&prev.borrow().vnode),
                    to = %describe(&next),
                    "replace"
                );
                replace(backend, parent, &prev, next).map(Some)
            } else if next.kind().is_component() {
                update_component(backend, parent, &prev, Some(next), None)?;
                Ok(Some(prev))
            } else {
                update_host(backend, &prev, next)?;
                Ok(Some(prev))
            }
        }
    }
}

/// Builds a fresh record subtree for `vnode`.
///
/// The caller attaches the returned record's live node; `parent` is recorded
/// so component-initiated updates know where to re-enter.
fn instantiate<B: Backend>(
    backend: &B,
    parent: &B::Node,
    vnode: VNode,
) -> Result<RenderedLink<B>, Error> {
    match vnode.kind().clone() {
        NodeKind::Component(spec) => instantiate_component(backend, parent, &spec, vnode),
        NodeKind::Text => {
            let value = vnode
                .props()
                .get(TEXT_VALUE)
                .map(PropValue::display_text)
                .unwrap_or_default();
            let live = backend.create_text(&value)?;
            Ok(RenderedNode::link(
                vnode,
                Some(live),
                parent.clone(),
                Vec::new(),
                None,
            ))
        }
        NodeKind::Host(tag) => {
            let live = backend.create_element(&tag)?;
            patch::update_display_properties(&live, None, vnode.props());

            let mut children = Vec::with_capacity(vnode.children().len());
            for child in vnode.children().iter().cloned() {
                let record = instantiate(backend, &live, child)?;
                let child_live = record.borrow().node.clone();
                if let Some(child_live) = child_live {
                    live.append_child(&child_live);
                }
                children.push(record);
            }

            Ok(RenderedNode::link(
                vnode,
                Some(live),
                parent.clone(),
                children,
                None,
            ))
        }
    }
}

fn instantiate_component<B: Backend>(
    backend: &B,
    parent: &B::Node,
    spec: &ComponentSpec,
    vnode: VNode,
) -> Result<RenderedLink<B>, Error> {
    let scope = Scope::new();
    let instance = spec.construct(vnode.props().clone(), scope.clone());
    scope.seed_state(instance.initial_state());

    let host = ComponentHost {
        instance,
        props: vnode.props().clone(),
        scope: scope.clone(),
        name: spec.name(),
    };
    let rendered = host.render()?;
    let produced = rendered.is_some();

    let (node, children) = match rendered {
        Some(child_vnode) => {
            let child = instantiate(backend, parent, child_vnode)?;
            let live = child.borrow().node.clone();
            (live, vec![child])
        }
        None => (None, Vec::new()),
    };

    let record = RenderedNode::link(vnode, node, parent.clone(), children, Some(host));
    bind_update_request(backend, &record, &scope);

    if produced {
        with_host(&record, |host| {
            tracing::trace!(component = host.name, "mounted");
            host.instance.did_mount();
        })?;
    }

    Ok(record)
}

/// Update-in-place for a host or text node whose kind is unchanged.
fn update_host<B: Backend>(
    backend: &B,
    record: &RenderedLink<B>,
    next: VNode,
) -> Result<(), Error> {
    let live = record
        .borrow()
        .node
        .clone()
        .ok_or_else(|| Error::precondition("host record has no live node"))?;

    {
        let prev_props = record.borrow().vnode.props().clone();
        patch::update_display_properties(&live, Some(&prev_props), next.props());
    }

    // Positional child matching over max(prev, next) slots.
    let prev_children = std::mem::take(&mut record.borrow_mut().children);
    let slots = cmp::max(prev_children.len(), next.children().len());
    let mut prev_slots: Vec<Option<RenderedLink<B>>> =
        prev_children.into_iter().map(Some).collect();
    let mut reconciled = Vec::with_capacity(slots);

    for index in 0..slots {
        let prev_slot = prev_slots.get_mut(index).and_then(Option::take);
        let next_slot = next.children().get(index).cloned();
        if let Some(child) = reconcile(backend, &live, prev_slot, next_slot)? {
            reconciled.push(child);
        }
    }

    let mut node = record.borrow_mut();
    node.children = reconciled;
    node.vnode = next;
    Ok(())
}

/// Update-in-place for a component whose spec is unchanged.
///
/// `next` carries the new description on a props-driven pass and is `None`
/// on a state-driven pass; `prev_state` is the pre-merge snapshot handed
/// over by `set_state`, or `None` to snapshot the (unchanged) current state.
pub(crate) fn update_component<B: Backend>(
    backend: &B,
    parent: &B::Node,
    record: &RenderedLink<B>,
    next: Option<VNode>,
    prev_state: Option<State>,
) -> Result<(), Error> {
    let mut host = record
        .borrow_mut()
        .component
        .take()
        .ok_or_else(|| Error::precondition("component record has no instance"))?;
    tracing::trace!(component = host.name, "update");

    let prev_props = host.props.clone();
    if let Some(next) = &next {
        host.props = next.props().clone();
    }
    let prev_state = prev_state.unwrap_or_else(|| host.scope.state());

    let rendered = match host.render() {
        Ok(rendered) => rendered,
        Err(error) => {
            record.borrow_mut().component = Some(host);
            return Err(error);
        }
    };
    let produced = rendered.is_some();

    let prev_child = record.borrow_mut().children.pop();
    if !produced && prev_child.is_some() {
        host.instance.will_unmount();
    }

    let child = match reconcile(backend, parent, prev_child, rendered) {
        Ok(child) => child,
        Err(error) => {
            record.borrow_mut().component = Some(host);
            return Err(error);
        }
    };

    if produced {
        host.instance.did_update(&prev_props, &prev_state);
    }

    {
        let mut node = record.borrow_mut();
        node.node = child.as_ref().and_then(|child| child.borrow().node.clone());
        node.children = child.into_iter().collect();
        if let Some(next) = next {
            node.vnode = next;
        }
        node.component = Some(host);
    }
    Ok(())
}

/// Swaps a subtree of a different kind in wholesale.
///
/// A component instance discarded here receives no unmount hook; only the
/// unmount and renders-nothing paths fire it.
fn replace<B: Backend>(
    backend: &B,
    parent: &B::Node,
    prev: &RenderedLink<B>,
    next: VNode,
) -> Result<RenderedLink<B>, Error> {
    let record = instantiate(backend, parent, next)?;
    let old_live = prev.borrow().node.clone();
    let new_live = record.borrow().node.clone();
    match (old_live, new_live) {
        (Some(old), Some(new)) => parent.replace_child(&new, &old),
        (Some(old), None) => parent.remove_child(&old),
        (None, Some(new)) => {
            // Nothing to anchor on; the fresh subtree joins at the end.
            tracing::trace!("replacing an empty subtree by appending");
            parent.append_child(&new);
        }
        (None, None) => {}
    }
    Ok(record)
}

/// Fires `will_unmount` once on every component host in a discarded
/// subtree, parents first.
fn teardown<B: Backend>(record: &RenderedLink<B>) {
    let children = {
        let mut node = record.borrow_mut();
        if let Some(host) = node.component.as_mut() {
            host.instance.will_unmount();
        }
        std::mem::take(&mut node.children)
    };
    for child in &children {
        teardown(child);
    }
}

/// Binds the update request that re-enters reconciliation at this
/// component's own subtree root. The record is held weakly: a request
/// arriving after unmount finds nothing to do.
fn bind_update_request<B: Backend>(backend: &B, record: &RenderedLink<B>, scope: &Scope) {
    let backend = backend.clone();
    let weak = Rc::downgrade(record);
    scope.bind_request(Box::new(move |prev_state: State| {
        let Some(record) = weak.upgrade() else {
            tracing::trace!("update requested for an unmounted component");
            return Ok(());
        };
        let parent = record.borrow().parent.clone();
        update_component(&backend, &parent, &record, None, Some(prev_state))
    }));
}

/// Runs a hook with the host temporarily taken out of its record, so user
/// code never observes the record borrowed.
fn with_host<B: Backend>(
    record: &RenderedLink<B>,
    hook: impl FnOnce(&mut ComponentHost),
) -> Result<(), Error> {
    let mut host = record
        .borrow_mut()
        .component
        .take()
        .ok_or_else(|| Error::precondition("component record has no instance"))?;
    hook(&mut host);
    record.borrow_mut().component = Some(host);
    Ok(())
}

fn describe(vnode: &VNode) -> String {
    match vnode.kind() {
        NodeKind::Host(tag) => tag.clone(),
        NodeKind::Text => "#text".to_owned(),
        NodeKind::Component(spec) => spec.name().to_owned(),
    }
}
