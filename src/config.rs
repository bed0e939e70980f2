//! Gameplay tuning loaded from TOML.
//!
//! Every field is optional; missing ones keep their defaults.
//!
//! ```toml
//! [motion]
//! acceleration = 400.0
//! max_velocity_x = 100.0
//!
//! [animation]
//! frame_start = 0
//! frame_end = 12
//! fps = 20.0
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::components::{MotionTuning, SpriteAnimation};
use crate::error::ConfigError;

/// Starting animation for newly spawned entities.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationTuning {
    pub frame_start: u32,
    pub frame_end: u32,
    pub frame_offset_y: u32,
    pub fps: f64,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        let anim = SpriteAnimation::default();
        Self {
            frame_start: anim.frame_start(),
            frame_end: anim.frame_end(),
            frame_offset_y: anim.frame_offset_y(),
            fps: anim.fps(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub motion: MotionTuning,
    pub animation: AnimationTuning,
}

impl Tuning {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = toml::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?tuning, "tuning loaded");
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.motion;
        let fields = [
            ("acceleration", m.acceleration),
            ("deceleration", m.deceleration),
            ("max_velocity_x", m.max_velocity_x),
            ("world_meter_in_pixel", m.world_meter_in_pixel),
            ("world_gravitation", m.world_gravitation),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::Motion(format!("{name} must be finite, got {value}")));
            }
        }
        for (name, value) in &fields[..3] {
            if *value < 0.0 {
                return Err(ConfigError::Motion(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        let a = &self.animation;
        SpriteAnimation::new(a.frame_start, a.frame_end, a.frame_offset_y, a.fps)?;
        Ok(())
    }
}
