use serde::Deserialize;

/// Motion constants, fixed per entity after construction.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Horizontal speed gained per second while moving (px/s²).
    pub acceleration: f64,
    /// Horizontal speed lost per second while not moving (px/s²).
    pub deceleration: f64,
    /// Horizontal speed cap (px/s).
    pub max_velocity_x: f64,
    /// Pixels per world meter.
    pub world_meter_in_pixel: f64,
    /// Gravitational constant in meters per second squared.
    pub world_gravitation: f64,
}

impl MotionTuning {
    /// Gravity in pixel units.
    pub fn gravity(&self) -> f64 {
        self.world_meter_in_pixel * self.world_gravitation
    }
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            acceleration: 400.0,
            deceleration: 200.0,
            max_velocity_x: 100.0,
            world_meter_in_pixel: 48.0,
            world_gravitation: 9.81,
        }
    }
}
