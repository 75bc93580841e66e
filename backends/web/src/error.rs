use core::fmt;

use ripple_core::Error;

/// Error type produced by the web backend.
#[derive(Debug, Clone)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g. when executed outside of a browser).
    DomUnavailable,
    /// The requested mounting node cannot be located.
    RootNotFound(String),
    /// A render pass failed.
    Render(String),
    /// Wrapper around JavaScript exceptions.
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomUnavailable => write!(f, "DOM is not available"),
            Self::RootNotFound(id) => write!(f, "failed to find DOM element with id `{id}`"),
            Self::Render(message) => write!(f, "render failure: {message}"),
            Self::Js(message) => write!(f, "JavaScript error: {message}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<Error> for WebError {
    fn from(value: Error) -> Self {
        Self::Render(value.to_string())
    }
}

impl From<WebError> for Error {
    fn from(value: WebError) -> Self {
        Self::Backend(value.to_string())
    }
}
