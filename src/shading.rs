//! CPU mirror of `shaders/waves.vert` and `shaders/waves.frag`.
//!
//! These functions follow the GLSL line by line, including GLSL's `mod`,
//! `step`, `smoothstep` and unclamped `mix`, so the host snapshot renderer
//! and the tests see the same surface the browser draws.

use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::noise::perlin;
use crate::uniforms::WaveUniforms;

/// GLSL `mod`: `x - y * floor(x / y)`. NaN when `y == 0`.
#[inline]
pub fn glsl_mod(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

/// GLSL `step`: 0 below the edge, 1 at or above it.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// GLSL `mix` with an unclamped factor.
#[inline]
pub fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// The repeating sawtooth added along z.
#[inline]
pub fn fold_elevation(z: f32, fold_frequency: f32, fold_height: f32) -> f32 {
    glsl_mod(z, fold_frequency) * fold_height
}

/// Noise-driven elevation, centred on 0.5.
#[inline]
pub fn wave_elevation(xz: Vec2, u: &WaveUniforms) -> f32 {
    perlin(xz * u.wave_frequency + u.wave_direction * u.time) * u.wave_amplitude + 0.5
}

/// What the vertex stage hands to the fragment stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Varyings {
    /// Displaced position in world space.
    pub model_position: Vec4,
    pub elevation: f32,
    pub fold_elevation: f32,
}

impl Varyings {
    /// Linear interpolation with barycentric weights, as the rasterizer does.
    pub fn interpolate(a: &Varyings, b: &Varyings, c: &Varyings, w: Vec3) -> Varyings {
        Varyings {
            model_position: a.model_position * w.x + b.model_position * w.y + c.model_position * w.z,
            elevation: a.elevation * w.x + b.elevation * w.y + c.elevation * w.z,
            fold_elevation: a.fold_elevation * w.x + b.fold_elevation * w.y + c.fold_elevation * w.z,
        }
    }
}

/// Displace one vertex given in object space. Pure in `position` and uniforms.
pub fn displace(position: Vec3, model: &Mat4, u: &WaveUniforms) -> Varyings {
    let mut model_position = *model * position.extend(1.0);
    let xz = model_position.xz();

    let elevation = wave_elevation(xz, u);
    let fold = fold_elevation(model_position.z, u.fold_frequency, u.fold_height);

    model_position.y += -model_position.z;
    model_position.y += fold;
    model_position.y += elevation - 0.5;

    Varyings {
        model_position,
        elevation,
        fold_elevation: fold,
    }
}

/// Full vertex stage: displacement then view/projection.
pub fn vertex(position: Vec3, model: &Mat4, view_projection: &Mat4, u: &WaveUniforms) -> (Vec4, Varyings) {
    let varyings = displace(position, model, u);
    (*view_projection * varyings.model_position, varyings)
}

/// The two gated halves of the three-stop gradient, before they are summed.
///
/// Each half is multiplied by a hard `step` gate. Both gates are open at
/// exactly 0.5, where each half equals `color2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GatedBlend {
    pub lower: Vec3,
    pub upper: Vec3,
}

impl GatedBlend {
    pub fn sum(&self) -> Vec3 {
        self.lower + self.upper
    }
}

pub fn gated_blend(color_perlin: f32, u: &WaveUniforms) -> GatedBlend {
    let lower = step(-0.5, -color_perlin)
        * mix(u.color1, u.color2, smoothstep(0.0, 0.5, color_perlin));
    let upper = step(0.5, color_perlin)
        * mix(u.color2, u.color3, smoothstep(0.5, 1.0, color_perlin));
    GatedBlend { lower, upper }
}

/// Noise value that selects the gradient position, centred on 0.5.
#[inline]
pub fn color_perlin(xz: Vec2, u: &WaveUniforms) -> f32 {
    perlin(xz * u.color_smoothing + Vec2::new(5.0, u.time / 2.0)) + 0.5
}

/// Fragment stage: final opaque RGBA for one pixel.
pub fn fragment(v: &Varyings, u: &WaveUniforms) -> Vec4 {
    let p = v.model_position;
    let cp = color_perlin(p.xz(), u);
    let blended = gated_blend(cp, u).sum();
    let color = mix(blended, u.background_color, -p.z + 0.5);
    mix(u.background_color, color, v.elevation + 0.5).extend(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glsl_mod_wraps_negatives_upwards() {
        assert!((glsl_mod(-0.01, 0.05) - 0.04).abs() < 1e-6);
        assert!((glsl_mod(0.12, 0.05) - 0.02).abs() < 1e-6);
        assert!(glsl_mod(1.0, 0.0).is_nan());
    }

    #[test]
    fn step_is_closed_at_the_edge() {
        assert_eq!(step(0.5, 0.5), 1.0);
        assert_eq!(step(0.5, 0.499), 0.0);
        assert_eq!(step(-0.5, -0.5), 1.0);
    }

    #[test]
    fn smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0, 0.5, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 0.5, 0.5), 1.0);
        assert_eq!(smoothstep(0.5, 1.0, 0.5), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    }

    #[test]
    fn only_one_gate_open_away_from_the_seam() {
        let u = WaveUniforms::default();
        let low = gated_blend(0.25, &u);
        assert_eq!(low.upper, Vec3::ZERO);
        assert_ne!(low.lower, Vec3::ZERO);

        let high = gated_blend(0.75, &u);
        assert_eq!(high.lower, Vec3::ZERO);
        assert_ne!(high.upper, Vec3::ZERO);
    }
}
