use tracing::trace;

use crate::error::KinematicsError;

pub const DEFAULT_FRAME_START: u32 = 0;
pub const DEFAULT_FRAME_END: u32 = 12;
pub const DEFAULT_FPS: f64 = 20.0;

/// Looping walk through one row of a sprite sheet.
///
/// Frames `frame_start..frame_end` are played in order; `frame_end` is
/// exclusive. `frame_offset_y` selects the sheet row. Construction and
/// [`SpriteAnimation::set`] reject empty ranges and non-positive rates, so
/// [`SpriteAnimation::advance`] never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteAnimation {
    frame: u32,
    frame_start: u32,
    frame_end: u32,
    frame_offset_y: u32,
    fps: f64,
    /// Seconds accumulated since the last frame advance.
    frame_duration: f64,
}

impl SpriteAnimation {
    pub fn new(
        frame_start: u32,
        frame_end: u32,
        frame_offset_y: u32,
        fps: f64,
    ) -> Result<Self, KinematicsError> {
        validate(frame_start, frame_end, fps)?;
        Ok(Self {
            frame: 0,
            frame_start,
            frame_end,
            frame_offset_y,
            fps,
            frame_duration: 0.0,
        })
    }

    /// Replace range, row and rate. The current frame and accumulated time are
    /// kept; the next advance snaps the frame into the new range.
    /// On error nothing changes.
    pub fn set(
        &mut self,
        frame_start: u32,
        frame_end: u32,
        frame_offset_y: u32,
        fps: f64,
    ) -> Result<(), KinematicsError> {
        validate(frame_start, frame_end, fps)?;
        self.frame_start = frame_start;
        self.frame_end = frame_end;
        self.frame_offset_y = frame_offset_y;
        self.fps = fps;
        Ok(())
    }

    /// Accumulate `dt` and move on at most one frame.
    ///
    /// The frame advances once the accumulated time strictly exceeds one frame
    /// interval, after which the accumulator restarts from zero. Long deltas
    /// never skip frames.
    pub fn advance(&mut self, dt: f64) {
        self.frame_duration += dt;

        if self.frame < self.frame_start {
            self.frame = self.frame_start;
        }

        if self.frame_duration > self.frame_interval() {
            self.frame += 1;
            self.frame_duration = 0.0;
        }

        if self.frame >= self.frame_end {
            trace!(frame = self.frame, start = self.frame_start, "animation looped");
            self.frame = self.frame_start;
        }
    }

    /// Seconds per frame.
    fn frame_interval(&self) -> f64 {
        1.0 / self.fps
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn frame_start(&self) -> u32 {
        self.frame_start
    }

    pub fn frame_end(&self) -> u32 {
        self.frame_end
    }

    pub fn frame_offset_y(&self) -> u32 {
        self.frame_offset_y
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn frame_duration(&self) -> f64 {
        self.frame_duration
    }
}

impl Default for SpriteAnimation {
    fn default() -> Self {
        Self {
            frame: 0,
            frame_start: DEFAULT_FRAME_START,
            frame_end: DEFAULT_FRAME_END,
            frame_offset_y: 0,
            fps: DEFAULT_FPS,
            frame_duration: 0.0,
        }
    }
}

fn validate(frame_start: u32, frame_end: u32, fps: f64) -> Result<(), KinematicsError> {
    if frame_start >= frame_end {
        return Err(KinematicsError::InvalidFrameRange {
            start: frame_start,
            end: frame_end,
        });
    }
    if !fps.is_finite() || fps <= 0.0 {
        return Err(KinematicsError::InvalidFrameRate(fps));
    }
    Ok(())
}
