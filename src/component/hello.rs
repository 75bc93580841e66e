//! The hello-world shell.

use ripple_core::{ComponentSpec, Error, Props, VNode, children, create_element, props};

use super::Counter;

/// Function component: a greeting heading wrapping a [`Counter`].
///
/// Invoke through [`ElementType::function`](ripple_core::ElementType) or
/// call it directly; function components are plain functions.
///
/// # Errors
///
/// Element-construction failures.
pub fn hello(props: Props) -> Result<VNode, Error> {
    let heading = create_element(
        "h1",
        props! { "textContent" => "Hello, World!" },
        children![],
    )?;
    let counter = create_element(ComponentSpec::of::<Counter>(), Props::new(), children![])?;

    create_element("div", props, children![heading, counter])
}
