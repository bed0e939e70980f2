use std::time::Instant;

/// Upper bound on a single frame delta, so a stalled window does not teleport
/// entities across the map on the next frame.
pub const MAX_FRAME_DT: f64 = 0.25;

pub struct FrameTimer {
    last: Instant,
    pub dt: f64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            dt: 0.0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.dt = now.duration_since(self.last).as_secs_f64().min(MAX_FRAME_DT);
        self.last = now;
    }
}
