use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding to the host canvas
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("canvas element is not mounted")]
    NotMounted,
    #[error("no global window to listen on")]
    NoWindow,
    #[error("canvas has no 2d rendering context")]
    ContextUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SurfaceError::Js(message)
    }
}
