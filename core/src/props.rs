//! Property maps shared by virtual nodes and component state.

use std::collections::BTreeMap;

use crate::event::EventHandler;

/// A single property value.
///
/// Equality is structural except for [`PropValue::Handler`], which compares
/// by listener identity.
#[derive(Debug, Clone)]
pub enum PropValue {
    /// A textual value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean flag.
    Bool(bool),
    /// An event listener.
    Handler(EventHandler),
}

impl PropValue {
    /// Returns the textual value, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the event listener, if this is one.
    #[must_use]
    pub const fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            Self::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    /// Renders the value as display text, the form used by text nodes.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Handler(_) => String::new(),
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Handler(a), Self::Handler(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<EventHandler> for PropValue {
    fn from(value: EventHandler) -> Self {
        Self::Handler(value)
    }
}

/// An ordered mapping from property names to [`PropValue`]s.
///
/// The same map type backs both element props and component state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: BTreeMap<String, PropValue>,
}

/// Component state: a property map replaced by shallow merge on update.
pub type State = Props;

impl Props {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts a property, returning the previous value if one existed.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks a property up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    /// Removes a property by name.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        self.entries.remove(name)
    }

    /// Returns `true` when a property with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Shallow merge: every entry of `other` is inserted, overwriting any
    /// entry already present under the same name.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Iterates over the entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<PropValue>> FromIterator<(N, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (name, value) in iter {
            props.insert(name, value);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_incoming_entries() {
        let mut state = Props::new().with("count", 1.0).with("label", "ticks");
        state.merge(Props::new().with("count", 2.0));

        assert_eq!(state.get("count").and_then(PropValue::as_number), Some(2.0));
        assert_eq!(state.get("label").and_then(PropValue::as_text), Some("ticks"));
    }

    #[test]
    fn merge_keeps_untouched_entries() {
        let mut state = Props::new().with("is_on", false);
        state.merge(Props::new().with("other", "x"));

        assert_eq!(state.get("is_on").and_then(PropValue::as_bool), Some(false));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn handler_values_compare_by_identity() {
        let handler = EventHandler::new(|_| {});
        let a = PropValue::from(handler.clone());
        let b = PropValue::from(handler);
        let c = PropValue::from(EventHandler::new(|_| {}));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_text_formats_numbers_like_source_text() {
        assert_eq!(PropValue::from(42.0).display_text(), "42");
        assert_eq!(PropValue::from(1.5).display_text(), "1.5");
        assert_eq!(PropValue::from(true).display_text(), "true");
    }
}
