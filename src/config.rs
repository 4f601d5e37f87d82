//! JSON presets holding every tweakable scene parameter.

use serde::{Deserialize, Serialize};

use crate::camera::OrthoCamera;
use crate::clock::AnimationClock;
use crate::error::WavesError;
use crate::uniforms::WaveUniforms;

/// A preset. Missing fields fall back to the scene defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WavesConfig {
    pub uniforms: WaveUniforms,
    pub clock: AnimationClock,
    pub camera: OrthoCamera,
}

impl WavesConfig {
    pub fn from_json(raw: &str) -> Result<Self, WavesError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, WavesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, WavesError> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        log::info!("loaded preset from {}", path.display());
        Ok(config)
    }
}
