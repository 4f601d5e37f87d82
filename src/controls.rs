//! Panel controls: what each one is called, its bounds, and the slot it
//! drives. The DOM panel is generated from [`Control::ALL`].

use glam::{Vec2, Vec3};

use crate::camera::{DEFAULT_POSITION, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, POSITION_LIMIT};
use crate::clock::{AnimationClock, MAX_SPEED, MIN_SPEED};
use crate::error::WavesError;
use crate::uniforms::{Uniform, WaveUniforms};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
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
    Pause,
    Speed,
    CameraPosition,
    CameraZoom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Color,
    Float,
    Vec2,
    Vec3,
    Bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlValue {
    Color(Vec3),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Bool(bool),
}

impl ControlValue {
    pub fn kind(&self) -> ControlKind {
        match self {
            ControlValue::Color(_) => ControlKind::Color,
            ControlValue::Float(_) => ControlKind::Float,
            ControlValue::Vec2(_) => ControlKind::Vec2,
            ControlValue::Vec3(_) => ControlKind::Vec3,
            ControlValue::Bool(_) => ControlKind::Bool,
        }
    }

    /// Clamp numeric values (per component for vectors) into `[min, max]`.
    fn clamped(self, range: Option<(f32, f32)>) -> Self {
        let Some((min, max)) = range else {
            return self;
        };
        match self {
            ControlValue::Float(v) => ControlValue::Float(v.clamp(min, max)),
            ControlValue::Vec2(v) => ControlValue::Vec2(v.clamp(Vec2::splat(min), Vec2::splat(max))),
            ControlValue::Vec3(v) => ControlValue::Vec3(v.clamp(Vec3::splat(min), Vec3::splat(max))),
            other => other,
        }
    }
}

/// Static description of a control as the panel shows it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSpec {
    pub group: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
    pub range: Option<(f32, f32)>,
    pub step: f32,
}

impl Control {
    pub const COUNT: usize = 14;

    pub const ALL: [Control; Control::COUNT] = [
        Control::Color1,
        Control::Color2,
        Control::Color3,
        Control::BackgroundColor,
        Control::ColorSmoothing,
        Control::FoldFrequency,
        Control::FoldHeight,
        Control::WaveFrequency,
        Control::WaveAmplitude,
        Control::WaveDirection,
        Control::Pause,
        Control::Speed,
        Control::CameraPosition,
        Control::CameraZoom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier, used for DOM ids.
    pub fn key(self) -> &'static str {
        match self {
            Control::Color1 => "color1",
            Control::Color2 => "color2",
            Control::Color3 => "color3",
            Control::BackgroundColor => "backgroundColor",
            Control::ColorSmoothing => "colorSmoothing",
            Control::FoldFrequency => "foldFrequency",
            Control::FoldHeight => "foldHeight",
            Control::WaveFrequency => "waveFrequency",
            Control::WaveAmplitude => "waveAmplitude",
            Control::WaveDirection => "waveDirection",
            Control::Pause => "pause",
            Control::Speed => "speed",
            Control::CameraPosition => "cameraPosition",
            Control::CameraZoom => "cameraZoom",
        }
    }

    pub fn from_key(key: &str) -> Result<Control, WavesError> {
        Control::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| WavesError::UnknownControl(key.to_string()))
    }

    pub fn spec(self) -> ControlSpec {
        let (group, label, kind, range, step) = match self {
            Control::Color1 => ("Colors", "color1", ControlKind::Color, None, 0.0),
            Control::Color2 => ("Colors", "color2", ControlKind::Color, None, 0.0),
            Control::Color3 => ("Colors", "color3", ControlKind::Color, None, 0.0),
            Control::BackgroundColor => ("Colors", "backgroundColor", ControlKind::Color, None, 0.0),
            Control::ColorSmoothing => ("Colors", "colorSmoothing", ControlKind::Float, Some((0.0, 5.0)), 0.01),
            Control::FoldFrequency => ("Folds", "frequency", ControlKind::Float, Some((0.0, 1.0)), 0.001),
            Control::FoldHeight => ("Folds", "height", ControlKind::Float, Some((0.0, 10.0)), 0.01),
            Control::WaveFrequency => ("Waves", "frequency", ControlKind::Float, Some((0.0, 10.0)), 0.01),
            Control::WaveAmplitude => ("Waves", "amplitude", ControlKind::Float, Some((0.0, 3.0)), 0.01),
            Control::WaveDirection => ("Waves", "direction", ControlKind::Vec2, Some((-5.0, 5.0)), 0.01),
            Control::Pause => ("Time", "pause", ControlKind::Bool, None, 0.0),
            Control::Speed => ("Time", "speed", ControlKind::Float, Some((MIN_SPEED, MAX_SPEED)), 0.01),
            Control::CameraPosition => (
                "Camera",
                "position",
                ControlKind::Vec3,
                Some((-POSITION_LIMIT, POSITION_LIMIT)),
                0.01,
            ),
            Control::CameraZoom => ("Camera", "zoom", ControlKind::Float, Some((MIN_ZOOM, MAX_ZOOM)), 1.0),
        };
        ControlSpec { group, label, kind, range, step }
    }

    /// The shader uniform this control writes, if it writes one.
    pub fn uniform(self) -> Option<Uniform> {
        match self {
            Control::Color1 => Some(Uniform::Color1),
            Control::Color2 => Some(Uniform::Color2),
            Control::Color3 => Some(Uniform::Color3),
            Control::BackgroundColor => Some(Uniform::BackgroundColor),
            Control::ColorSmoothing => Some(Uniform::ColorSmoothing),
            Control::FoldFrequency => Some(Uniform::FoldFrequency),
            Control::FoldHeight => Some(Uniform::FoldHeight),
            Control::WaveFrequency => Some(Uniform::WaveFrequency),
            Control::WaveAmplitude => Some(Uniform::WaveAmplitude),
            Control::WaveDirection => Some(Uniform::WaveDirection),
            Control::Pause | Control::Speed | Control::CameraPosition | Control::CameraZoom => None,
        }
    }

    /// Check the value's kind and clamp it into this control's bounds.
    pub fn validate(self, value: ControlValue) -> Result<ControlValue, WavesError> {
        let spec = self.spec();
        if value.kind() != spec.kind {
            return Err(WavesError::ControlKind {
                control: self,
                expected: spec.kind,
                got: value.kind(),
            });
        }
        Ok(value.clamped(spec.range))
    }
}

/// The values the panel displays, one per control.
///
/// Kept apart from the render state: control writes go to both, while
/// render-side changes (orbiting) only reach the panel through an explicit
/// sync.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    values: [ControlValue; Control::COUNT],
}

impl Default for PanelState {
    fn default() -> Self {
        Self::capture(
            &WaveUniforms::default(),
            &AnimationClock::default(),
            DEFAULT_POSITION,
            DEFAULT_ZOOM,
        )
    }
}

impl PanelState {
    /// Snapshot the panel from render state.
    pub fn capture(
        uniforms: &WaveUniforms,
        clock: &AnimationClock,
        camera_position: Vec3,
        camera_zoom: f32,
    ) -> Self {
        let values = Control::ALL.map(|control| match control {
            Control::Color1 => ControlValue::Color(uniforms.color1),
            Control::Color2 => ControlValue::Color(uniforms.color2),
            Control::Color3 => ControlValue::Color(uniforms.color3),
            Control::BackgroundColor => ControlValue::Color(uniforms.background_color),
            Control::ColorSmoothing => ControlValue::Float(uniforms.color_smoothing),
            Control::FoldFrequency => ControlValue::Float(uniforms.fold_frequency),
            Control::FoldHeight => ControlValue::Float(uniforms.fold_height),
            Control::WaveFrequency => ControlValue::Float(uniforms.wave_frequency),
            Control::WaveAmplitude => ControlValue::Float(uniforms.wave_amplitude),
            Control::WaveDirection => ControlValue::Vec2(uniforms.wave_direction),
            Control::Pause => ControlValue::Bool(clock.paused),
            Control::Speed => ControlValue::Float(clock.speed),
            Control::CameraPosition => ControlValue::Vec3(camera_position),
            Control::CameraZoom => ControlValue::Float(camera_zoom),
        });
        Self { values }
    }

    pub fn get(&self, control: Control) -> ControlValue {
        self.values[control.index()]
    }

    pub(crate) fn put(&mut self, control: Control, value: ControlValue) {
        self.values[control.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Control, ControlValue)> + '_ {
        Control::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for control in Control::ALL {
            assert_eq!(Control::from_key(control.key()).unwrap(), control);
        }
        assert!(Control::from_key("nope").is_err());
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, control) in Control::ALL.into_iter().enumerate() {
            assert_eq!(control.index(), i);
        }
    }

    #[test]
    fn validate_clamps_and_checks_kind() {
        let v = Control::Speed.validate(ControlValue::Float(9.0)).unwrap();
        assert_eq!(v, ControlValue::Float(MAX_SPEED));

        let v = Control::FoldFrequency.validate(ControlValue::Float(-1.0)).unwrap();
        assert_eq!(v, ControlValue::Float(0.0));

        let err = Control::Pause.validate(ControlValue::Float(1.0)).unwrap_err();
        assert!(matches!(err, WavesError::ControlKind { control: Control::Pause, .. }));
    }

    #[test]
    fn default_panel_shows_default_kinds() {
        let panel = PanelState::default();
        for (control, value) in panel.iter() {
            assert_eq!(value.kind(), control.spec().kind, "{control:?}");
        }
    }
}
