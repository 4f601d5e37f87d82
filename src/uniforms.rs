//! Shader uniform values for the waves material.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::color;

/// Every value the waves program reads. Fields are independent of each other.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveUniforms {
    #[serde(with = "color::serde_hex")]
    pub color1: Vec3,
    #[serde(with = "color::serde_hex")]
    pub color2: Vec3,
    #[serde(with = "color::serde_hex")]
    pub color3: Vec3,
    #[serde(with = "color::serde_hex")]
    pub background_color: Vec3,
    pub color_smoothing: f32,
    pub fold_frequency: f32,
    pub fold_height: f32,
    pub wave_frequency: f32,
    pub wave_amplitude: f32,
    pub wave_direction: Vec2,
    pub time: f32,
}

pub const DEFAULT_COLOR1: &str = "#635bff";
pub const DEFAULT_COLOR2: &str = "#ff39a9";
pub const DEFAULT_COLOR3: &str = "#ffbc13";
pub const LIGHT_BACKGROUND: &str = "#ffffff";
pub const DARK_BACKGROUND: &str = "#000000";

fn rgb(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}

impl Default for WaveUniforms {
    fn default() -> Self {
        Self {
            color1: rgb(0x63, 0x5b, 0xff),
            color2: rgb(0xff, 0x39, 0xa9),
            color3: rgb(0xff, 0xbc, 0x13),
            background_color: Vec3::ONE,
            color_smoothing: 0.5,
            fold_frequency: 0.05,
            fold_height: 2.0,
            wave_frequency: 2.0,
            wave_amplitude: 1.0,
            wave_direction: Vec2::new(0.0, 1.0),
            time: 0.0,
        }
    }
}

/// Names a single uniform slot, used to cache GL locations and to check
/// that a control touched exactly one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Uniform {
    Color1,
    Color2,
    Color3,
    BackgroundColor,
    ColorSmoothing,
    FoldFrequency,
    FoldHeight,
    WaveFrequency,
    WaveAmplitude,
    WaveDirection,
    Time,
}

impl Uniform {
    pub const ALL: [Uniform; 11] = [
        Uniform::Color1,
        Uniform::Color2,
        Uniform::Color3,
        Uniform::BackgroundColor,
        Uniform::ColorSmoothing,
        Uniform::FoldFrequency,
        Uniform::FoldHeight,
        Uniform::WaveFrequency,
        Uniform::WaveAmplitude,
        Uniform::WaveDirection,
        Uniform::Time,
    ];

    /// Identifier as declared in the GLSL sources.
    pub fn glsl_name(self) -> &'static str {
        match self {
            Uniform::Color1 => "color1",
            Uniform::Color2 => "color2",
            Uniform::Color3 => "color3",
            Uniform::BackgroundColor => "backgroundColor",
            Uniform::ColorSmoothing => "colorSmoothing",
            Uniform::FoldFrequency => "foldFrequency",
            Uniform::FoldHeight => "foldHeight",
            Uniform::WaveFrequency => "waveFrequency",
            Uniform::WaveAmplitude => "waveAmplitude",
            Uniform::WaveDirection => "waveDirection",
            Uniform::Time => "time",
        }
    }
}

/// A uniform value in the shape the GL upload needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
}

impl WaveUniforms {
    pub fn get(&self, uniform: Uniform) -> UniformValue {
        match uniform {
            Uniform::Color1 => UniformValue::Vec3(self.color1),
            Uniform::Color2 => UniformValue::Vec3(self.color2),
            Uniform::Color3 => UniformValue::Vec3(self.color3),
            Uniform::BackgroundColor => UniformValue::Vec3(self.background_color),
            Uniform::ColorSmoothing => UniformValue::Float(self.color_smoothing),
            Uniform::FoldFrequency => UniformValue::Float(self.fold_frequency),
            Uniform::FoldHeight => UniformValue::Float(self.fold_height),
            Uniform::WaveFrequency => UniformValue::Float(self.wave_frequency),
            Uniform::WaveAmplitude => UniformValue::Float(self.wave_amplitude),
            Uniform::WaveDirection => UniformValue::Vec2(self.wave_direction),
            Uniform::Time => UniformValue::Float(self.time),
        }
    }

    /// Every slot with its current value, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Uniform, UniformValue)> + '_ {
        Uniform::ALL.iter().map(move |&u| (u, self.get(u)))
    }
}
