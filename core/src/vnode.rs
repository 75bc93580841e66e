//! Immutable descriptions of desired UI trees.

use core::any::type_name;
use core::fmt;
use std::rc::Rc;

use crate::component::ComponentSpec;
use crate::error::Error;
use crate::props::Props;

/// Prop key under which a text node carries its payload.
pub const TEXT_VALUE: &str = "node_value";

/// The resolved kind of a virtual node.
///
/// The kind is decided once, at construction; the reconciler never has to
/// re-derive it by inspecting values.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A literal tag, mapping directly to a renderable element.
    Host(String),
    /// The text marker; the payload lives in props under [`TEXT_VALUE`].
    Text,
    /// A stateful component boundary.
    Component(ComponentSpec),
}

impl NodeKind {
    /// Returns `true` for host-tag nodes.
    #[must_use]
    pub const fn is_host(&self) -> bool {
        matches!(self, Self::Host(_))
    }

    /// Returns `true` for text nodes.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Returns `true` for component boundaries.
    #[must_use]
    pub const fn is_component(&self) -> bool {
        matches!(self, Self::Component(_))
    }

    /// Returns the host tag, if this is a host node.
    #[must_use]
    pub fn host_tag(&self) -> Option<&str> {
        match self {
            Self::Host(tag) => Some(tag),
            _ => None,
        }
    }
}

/// Immutable description of one desired node and its children.
///
/// A fresh tree of these is built on every render pass; the reconciler
/// compares it against the previously rendered tree and mutates live nodes
/// to match.
#[derive(Debug, Clone, PartialEq)]
pub struct VNode {
    kind: NodeKind,
    props: Props,
    children: Vec<VNode>,
}

impl VNode {
    /// Returns the resolved node kind.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the node's props.
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Returns the node's children in order.
    #[must_use]
    pub fn children(&self) -> &[VNode] {
        &self.children
    }

    /// Wraps a primitive value as a renderable text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            props: Props::new().with(TEXT_VALUE, value.into()),
            children: Vec::new(),
        }
    }
}

/// A function component: invoked immediately by [`create_element`], its
/// return value stands in for the call. Function components never appear as
/// tree nodes.
#[derive(Clone)]
pub struct FunctionComponent(Rc<dyn Fn(Props) -> Result<VNode, Error>>);

impl FunctionComponent {
    /// Wraps a plain function as a function component.
    pub fn new(function: impl Fn(Props) -> Result<VNode, Error> + 'static) -> Self {
        Self(Rc::new(function))
    }

    fn call(&self, props: Props) -> Result<VNode, Error> {
        (self.0)(props)
    }
}

impl fmt::Debug for FunctionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

/// What an element may be constructed from.
#[derive(Debug, Clone)]
pub enum ElementType {
    /// A host tag such as `div` or `p`.
    Host(String),
    /// A plain function taking props.
    Function(FunctionComponent),
    /// A stateful component class.
    Component(ComponentSpec),
}

impl ElementType {
    /// Wraps a plain function as an element type.
    pub fn function(function: impl Fn(Props) -> Result<VNode, Error> + 'static) -> Self {
        Self::Function(FunctionComponent::new(function))
    }
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        Self::Host(tag.to_owned())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        Self::Host(tag)
    }
}

impl From<ComponentSpec> for ElementType {
    fn from(spec: ComponentSpec) -> Self {
        Self::Component(spec)
    }
}

impl From<FunctionComponent> for ElementType {
    fn from(function: FunctionComponent) -> Self {
        Self::Function(function)
    }
}

/// One entry in a child list passed to [`create_element`].
///
/// Empty entries are dropped and text-like entries are wrapped as text
/// nodes; nested lists are flattened.
#[derive(Debug, Clone)]
pub enum Child {
    /// An already-built virtual node.
    Node(VNode),
    /// A primitive value, wrapped as a text node.
    Text(String),
    /// A nested list, flattened in place.
    List(Vec<Child>),
    /// Nothing; dropped from the child list.
    Empty,
}

impl Child {
    fn collect_into(self, out: &mut Vec<VNode>) {
        match self {
            Self::Node(node) => out.push(node),
            Self::Text(value) => out.push(VNode::text(value)),
            Self::List(children) => {
                for child in children {
                    child.collect_into(out);
                }
            }
            Self::Empty => {}
        }
    }
}

impl From<VNode> for Child {
    fn from(node: VNode) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Child {
    fn from(value: f64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i32> for Child {
    fn from(value: i32) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Child {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for Child {
    fn from(value: bool) -> Self {
        if value { Self::Text(value.to_string()) } else { Self::Empty }
    }
}

impl From<Option<VNode>> for Child {
    fn from(node: Option<VNode>) -> Self {
        node.map_or(Self::Empty, Self::Node)
    }
}

impl From<Vec<VNode>> for Child {
    fn from(nodes: Vec<VNode>) -> Self {
        Self::List(nodes.into_iter().map(Self::Node).collect())
    }
}

impl From<Vec<Child>> for Child {
    fn from(children: Vec<Child>) -> Self {
        Self::List(children)
    }
}

/// Builds an immutable description of a desired node.
///
/// Plain functions short-circuit: they are invoked immediately with `props`
/// and their return value stands in for the call. Host and component
/// elements become [`VNode`]s whose child list is the flattened input with
/// empty entries dropped and primitives wrapped as text nodes.
///
/// Pure: no live node is touched.
///
/// # Errors
///
/// Returns [`Error::InvalidElementType`] for a blank host tag.
pub fn create_element(
    element: impl Into<ElementType>,
    props: Props,
    children: impl IntoIterator<Item = Child>,
) -> Result<VNode, Error> {
    match element.into() {
        ElementType::Function(function) => function.call(props),
        ElementType::Host(tag) => {
            if tag.trim().is_empty() {
                return Err(Error::InvalidElementType(
                    "host tag must not be empty".to_owned(),
                ));
            }
            Ok(VNode {
                kind: NodeKind::Host(tag),
                props,
                children: collect_children(children),
            })
        }
        ElementType::Component(spec) => Ok(VNode {
            kind: NodeKind::Component(spec),
            props,
            children: collect_children(children),
        }),
    }
}

fn collect_children(children: impl IntoIterator<Item = Child>) -> Vec<VNode> {
    let mut nodes = Vec::new();
    for child in children {
        child.collect_into(&mut nodes);
    }
    nodes
}
