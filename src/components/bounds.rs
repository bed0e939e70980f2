use glam::DVec2;

/// Axis-aligned box in world pixels, read by external collision logic.
/// Y grows downward, so `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl BoundingBox {
    /// Box anchored at `position` (top-left corner) with the given pixel extents.
    pub fn from_extents(position: DVec2, width: u32, height: u32) -> Self {
        Self {
            top: position.y,
            bottom: position.y + f64::from(height),
            left: position.x,
            right: position.x + f64::from(width),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_follows_position_and_extents() {
        let bb = BoundingBox::from_extents(DVec2::new(10.0, -4.0), 16, 24);
        assert_eq!(bb.left, 10.0);
        assert_eq!(bb.right, 26.0);
        assert_eq!(bb.top, -4.0);
        assert_eq!(bb.bottom, 20.0);
        assert_eq!(bb.width(), 16.0);
        assert_eq!(bb.height(), 24.0);
    }
}
