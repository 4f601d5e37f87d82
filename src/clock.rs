use serde::{Deserialize, Serialize};

/// Time added per rendered frame at speed 1.
pub const TIME_STEP: f32 = 0.001;
pub const MIN_SPEED: f32 = -3.0;
pub const MAX_SPEED: f32 = 3.0;

/// Frame-driven animation clock. Negative speeds run the animation backwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationClock {
    pub paused: bool,
    pub speed: f32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            paused: false,
            speed: 1.0,
        }
    }
}

impl AnimationClock {
    /// Advance `time` by one frame.
    pub fn tick(&self, time: &mut f32) {
        if !self.paused {
            *time += TIME_STEP * self.speed;
        }
    }
}
