use glam::DVec2;

use crate::components::Entity;

/// 2D camera. `position` is the world coordinate drawn at the top-left pixel
/// of the viewport.
pub struct Camera {
    pub position: DVec2,
    pub viewport: DVec2,
}

impl Camera {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            position: DVec2::ZERO,
            viewport: DVec2::new(f64::from(viewport_width), f64::from(viewport_height)),
        }
    }

    /// Center the viewport on `entity`.
    pub fn follow(&mut self, entity: &Entity) {
        let half_extents = DVec2::new(f64::from(entity.width()), f64::from(entity.height())) * 0.5;
        self.position = entity.position + half_extents - self.viewport * 0.5;
    }

    /// World position to screen position.
    pub fn to_screen(&self, world: DVec2) -> DVec2 {
        world - self.position
    }
}
