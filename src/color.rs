//! CSS hex colors <-> linear `[0, 1]` RGB triples.

use glam::Vec3;

use crate::error::WavesError;

/// Parse `#rgb` or `#rrggbb` (leading `#` optional) into components / 255.
pub fn parse_hex(hex: &str) -> Result<Vec3, WavesError> {
    let invalid = || WavesError::InvalidColor(hex.to_string());
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    let (r, g, b) = match digits.len() {
        3 => {
            // #abc expands to #aabbcc
            let r = channel(&digits[0..1])?;
            let g = channel(&digits[1..2])?;
            let b = channel(&digits[2..3])?;
            (r * 17, g * 17, b * 17)
        }
        6 => (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ),
        _ => return Err(invalid()),
    };

    Ok(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
}

/// Format a color as `#rrggbb`, clamping each channel into range.
pub fn to_hex(color: Vec3) -> String {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(color.x), byte(color.y), byte(color.z))
}

/// Convert a linear color to RGBA bytes, alpha fully opaque.
pub fn to_rgba8(color: Vec3) -> [u8; 4] {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [byte(color.x), byte(color.y), byte(color.z), 255]
}

/// `#[serde(with = "crate::color::serde_hex")]` for `Vec3` color fields.
pub mod serde_hex {
    use glam::Vec3;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hex(&raw).map_err(D::Error::custom)
    }
}
