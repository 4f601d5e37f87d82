//! Render-side state of the waves scene and the setters that mutate it.

use glam::{Mat4, Vec3};

use crate::camera::OrthoCamera;
use crate::clock::AnimationClock;
use crate::color;
use crate::config::WavesConfig;
use crate::controls::{Control, ControlValue, PanelState};
use crate::error::WavesError;
use crate::mesh::PlaneGeometry;
use crate::uniforms::{WaveUniforms, DARK_BACKGROUND, LIGHT_BACKGROUND};

/// Tilt of the plane about X, in radians.
pub const PLANE_TILT: f32 = -1.75;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn background(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_BACKGROUND,
            Theme::Dark => DARK_BACKGROUND,
        }
    }
}

#[derive(Clone, Debug)]
pub struct WavesScene {
    pub uniforms: WaveUniforms,
    pub clock: AnimationClock,
    pub camera: OrthoCamera,
    pub geometry: PlaneGeometry,
    panel: PanelState,
}

impl Default for WavesScene {
    fn default() -> Self {
        Self::from_config(&WavesConfig::default())
    }
}

impl WavesScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from a preset. Every controlled field goes through
    /// [`WavesScene::set_control`], so out-of-range preset values are clamped.
    pub fn from_config(config: &WavesConfig) -> Self {
        let requested = PanelState::capture(
            &config.uniforms,
            &config.clock,
            config.camera.position,
            config.camera.zoom,
        );
        let mut scene = Self {
            uniforms: config.uniforms,
            clock: config.clock,
            camera: config.camera,
            geometry: PlaneGeometry::default(),
            panel: requested.clone(),
        };
        for (control, value) in requested.iter() {
            match scene.set_control(control, value) {
                Ok(applied) if applied != value => {
                    log::warn!("preset {} = {:?} clamped to {:?}", control.key(), value, applied)
                }
                Ok(_) => {}
                Err(err) => log::warn!("preset {}: {}", control.key(), err),
            }
        }
        scene
    }

    pub fn to_config(&self) -> WavesConfig {
        WavesConfig {
            uniforms: self.uniforms,
            clock: self.clock,
            camera: self.camera,
        }
    }

    /// Object-to-world transform of the plane.
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_x(PLANE_TILT)
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Write one control value into its slot and the panel.
    ///
    /// The value is clamped into the control's bounds; the value actually
    /// stored is returned. No other slot is touched.
    pub fn set_control(&mut self, control: Control, value: ControlValue) -> Result<ControlValue, WavesError> {
        let value = control.validate(value)?;
        match (control, value) {
            (Control::Color1, ControlValue::Color(c)) => self.uniforms.color1 = c,
            (Control::Color2, ControlValue::Color(c)) => self.uniforms.color2 = c,
            (Control::Color3, ControlValue::Color(c)) => self.uniforms.color3 = c,
            (Control::BackgroundColor, ControlValue::Color(c)) => self.uniforms.background_color = c,
            (Control::ColorSmoothing, ControlValue::Float(v)) => self.uniforms.color_smoothing = v,
            (Control::FoldFrequency, ControlValue::Float(v)) => self.uniforms.fold_frequency = v,
            (Control::FoldHeight, ControlValue::Float(v)) => self.uniforms.fold_height = v,
            (Control::WaveFrequency, ControlValue::Float(v)) => self.uniforms.wave_frequency = v,
            (Control::WaveAmplitude, ControlValue::Float(v)) => self.uniforms.wave_amplitude = v,
            (Control::WaveDirection, ControlValue::Vec2(v)) => self.uniforms.wave_direction = v,
            (Control::Pause, ControlValue::Bool(b)) => self.clock.paused = b,
            (Control::Speed, ControlValue::Float(v)) => self.clock.speed = v,
            (Control::CameraPosition, ControlValue::Vec3(p)) => self.camera.position = p,
            (Control::CameraZoom, ControlValue::Float(z)) => self.camera.zoom = z,
            // unreachable: validate() already checked the kind
            (control, value) => {
                return Err(WavesError::ControlKind {
                    control,
                    expected: control.spec().kind,
                    got: value.kind(),
                })
            }
        }
        self.panel.put(control, value);
        log::debug!("{} = {:?}", control.key(), value);
        Ok(value)
    }

    /// Parse a CSS hex color and set it on a color control.
    pub fn set_color_hex(&mut self, control: Control, hex: &str) -> Result<ControlValue, WavesError> {
        let c = color::parse_hex(hex)?;
        self.set_control(control, ControlValue::Color(c))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), WavesError> {
        self.set_color_hex(Control::BackgroundColor, theme.background())?;
        log::info!("theme set to {:?}", theme);
        Ok(())
    }

    /// One rendered frame: advance `time` unless paused.
    pub fn advance_frame(&mut self) {
        self.clock.tick(&mut self.uniforms.time);
    }

    pub fn orbit(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        self.camera.orbit(dx, dy, viewport_height);
    }

    pub fn dolly(&mut self, delta_y: f32) {
        self.camera.dolly(delta_y);
    }

    /// Copy the camera back into the panel after an orbit interaction.
    pub fn sync_camera_controls(&mut self) {
        self.panel
            .put(Control::CameraPosition, ControlValue::Vec3(self.camera.position));
        self.panel.put(Control::CameraZoom, ControlValue::Float(self.camera.zoom));
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
        self.sync_camera_controls();
        log::info!("camera reset to {:?} zoom {}", self.camera.position, self.camera.zoom);
    }

    /// Current camera as `(position, zoom)`.
    pub fn camera_state(&self) -> (Vec3, f32) {
        (self.camera.position, self.camera.zoom)
    }

    pub fn view_projection(&self, width: f32, height: f32) -> Mat4 {
        self.camera.view_projection(width, height)
    }
}
