//! Orthographic camera looking at the origin, sized in CSS pixels / zoom.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.33, 4.81, 1.36);
pub const DEFAULT_ZOOM: f32 = 2400.0;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 10_000.0;
/// Per-axis bound on the camera position controls.
pub const POSITION_LIMIT: f32 = 50.0;

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;
// Keeps the orbit away from the poles where look_at degenerates.
const POLAR_EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrthoCamera {
    pub position: Vec3,
    pub zoom: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl OrthoCamera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    /// Frustum of `width x height` CSS pixels shrunk by `zoom`.
    pub fn projection(&self, width: f32, height: f32) -> Mat4 {
        let half_w = width * 0.5 / self.zoom;
        let half_h = height * 0.5 / self.zoom;
        Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, NEAR, FAR)
    }

    pub fn view_projection(&self, width: f32, height: f32) -> Mat4 {
        self.projection(width, height) * self.view()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotate around the origin by a pointer drag of `(dx, dy)` pixels on a
    /// viewport `height` pixels tall. A drag across the full height turns
    /// the camera once around.
    pub fn orbit(&mut self, dx: f32, dy: f32, height: f32) {
        let radius = self.position.length();
        if radius <= f32::EPSILON || height <= 0.0 {
            return;
        }

        let mut azimuth = self.position.x.atan2(self.position.z);
        let mut polar = (self.position.y / radius).clamp(-1.0, 1.0).acos();

        azimuth -= TAU * dx / height;
        polar = (polar - TAU * dy / height).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        let (sin_p, cos_p) = polar.sin_cos();
        let (sin_a, cos_a) = azimuth.sin_cos();
        self.position = Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * radius;
    }

    /// Wheel zoom; positive `delta_y` (scrolling down) zooms out.
    pub fn dolly(&mut self, delta_y: f32) {
        let scale = 0.95f32.powf(delta_y / 100.0);
        self.zoom = (self.zoom * scale).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_keeps_distance() {
        let mut cam = OrthoCamera::default();
        let before = cam.position.length();
        cam.orbit(120.0, -40.0, 800.0);
        assert!((cam.position.length() - before).abs() < 1e-4);
        assert_ne!(cam.position, DEFAULT_POSITION);
    }

    #[test]
    fn orbit_never_reaches_the_pole() {
        let mut cam = OrthoCamera::default();
        cam.orbit(0.0, 10_000.0, 100.0);
        let dir = cam.position.normalize();
        assert!(dir.y.abs() < 1.0);
        assert!(cam.view().is_finite());
    }

    #[test]
    fn dolly_is_clamped() {
        let mut cam = OrthoCamera::default();
        cam.dolly(-1.0e6);
        assert_eq!(cam.zoom, MAX_ZOOM);
        cam.dolly(1.0e6);
        assert_eq!(cam.zoom, MIN_ZOOM);
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let cam = OrthoCamera::default();
        let clip = cam.view_projection(800.0, 600.0) * glam::Vec4::W;
        assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4);
    }
}
