/// Builds a [`Props`](crate::Props) map from `name => value` pairs.
///
/// Values may be anything convertible into a [`PropValue`](crate::PropValue).
///
/// # Usage
///
/// ```rust
/// use ripple_core::props;
///
/// let props = props! { "textContent" => "Count: 0", "disabled" => false };
/// assert_eq!(props.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $(props.insert($name, $value);)+
        props
    }};
}

/// Builds a child list for [`create_element`](crate::create_element).
///
/// Entries may be anything convertible into a [`Child`](crate::Child):
/// nodes, strings, numbers, options, or nested lists.
///
/// # Usage
///
/// ```rust
/// use ripple_core::{children, create_element, props};
///
/// let node = create_element("p", props!(), children!["tick"]).unwrap();
/// assert_eq!(node.children().len(), 1);
/// ```
#[macro_export]
macro_rules! children {
    () => {
        ::std::vec::Vec::<$crate::Child>::new()
    };
    ($($child:expr),+ $(,)?) => {
        ::std::vec![$($crate::Child::from($child)),+]
    };
}
