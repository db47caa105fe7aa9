use thiserror::Error;

/// Failures binding the navbar to the browser document.
///
/// None of these are surfaced to the caller: the navbar keeps working with
/// whatever part of the environment is available and logs the rest.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T, E = DomError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(DomError::NoWindow.to_string(), "no global `window` available");
        assert_eq!(DomError::NoDocument.to_string(), "window has no document");
        assert_eq!(DomError::NoBody.to_string(), "document has no body");
    }
}
