use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of these reach the user; callers
/// log them and fall back to a static rendering.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn root_element() -> Result<web_sys::Element, DomError> {
    window()?
        .document()
        .ok_or(DomError::NoDocument)?
        .document_element()
        .ok_or(DomError::NoRootElement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomError::NoWindow.to_string(), "no global window");
        assert_eq!(
            DomError::Js("observer failed".to_string()).to_string(),
            "javascript error: observer failed"
        );
    }
}
