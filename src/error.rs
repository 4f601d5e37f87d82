use crate::controls::{Control, ControlKind};

/// Errors raised at the edges of the scene: parsing user input, presets and
/// (on the host) writing images. Shader math itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum WavesError {
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    #[error("control {control:?} expects a {expected:?} value, got {got:?}")]
    ControlKind {
        control: Control,
        expected: ControlKind,
        got: ControlKind,
    },

    #[error("unknown control: {0}")]
    UnknownControl(String),

    #[error("could not parse {0:?} as a number")]
    InvalidNumber(String),

    #[error("preset error: {0}")]
    Preset(#[from] serde_json::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<WavesError> for wasm_bindgen::JsValue {
    fn from(err: WavesError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
