use glam::DVec2;
use tracing::{debug, warn};

use super::{BoundingBox, EntityFlags, MotionTuning, SpriteAnimation, SpriteHandle};
use crate::config::Tuning;
use crate::error::KinematicsError;

/// A movable sprite in a horizontally wrapping side-scrolling world.
///
/// Position is the top-left corner in world pixels, Y growing downward.
/// `velocity.x` is a non-negative speed; [`EntityFlags::direction`] decides
/// which way it is applied. `velocity.y` and `distance_y` grow without
/// bound while the entity is airborne.
#[derive(Debug, Clone)]
pub struct Entity {
    width: u32,
    height: u32,
    map_width: u32,
    initial_position: DVec2,

    pub position: DVec2,
    pub velocity: DVec2,
    /// Vertical displacement integrated during the last airborne frame.
    pub distance_y: f64,

    pub motion: MotionTuning,
    pub bounds: BoundingBox,
    pub animation: SpriteAnimation,
    pub flags: EntityFlags,
    pub sprite: Option<SpriteHandle>,
}

impl Entity {
    /// Entity with default tuning, spawned at `spawn`.
    pub fn new(
        width: u32,
        height: u32,
        spawn: DVec2,
        map_width: u32,
    ) -> Result<Self, KinematicsError> {
        if width == 0 || height == 0 || map_width == 0 {
            return Err(KinematicsError::InvalidExtents {
                width,
                height,
                map_width,
            });
        }

        Ok(Self {
            width,
            height,
            map_width,
            initial_position: spawn,
            position: spawn,
            velocity: DVec2::ZERO,
            distance_y: 0.0,
            motion: MotionTuning::default(),
            bounds: BoundingBox::from_extents(spawn, width, height),
            animation: SpriteAnimation::default(),
            flags: EntityFlags::default(),
            sprite: None,
        })
    }

    /// Entity whose motion constants and starting animation come from `tuning`.
    pub fn with_tuning(
        width: u32,
        height: u32,
        spawn: DVec2,
        map_width: u32,
        tuning: &Tuning,
    ) -> Result<Self, KinematicsError> {
        let mut entity = Self::new(width, height, spawn, map_width)?;
        entity.motion = tuning.motion;
        let anim = tuning.animation;
        entity.animation =
            SpriteAnimation::new(anim.frame_start, anim.frame_end, anim.frame_offset_y, anim.fps)?;
        Ok(entity)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal wrap period in pixels.
    pub fn map_width(&self) -> u32 {
        self.map_width
    }

    pub fn initial_position(&self) -> DVec2 {
        self.initial_position
    }

    /// Recompute the bounding box from the current position.
    pub fn refresh_bounds(&mut self) {
        self.bounds = BoundingBox::from_extents(self.position, self.width, self.height);
    }

    /// Switch sprite animation. Rejects `frame_start >= frame_end` and
    /// non-positive or non-finite `fps`, leaving the current animation in place.
    pub fn set_animation(
        &mut self,
        frame_start: u32,
        frame_end: u32,
        frame_offset_y: u32,
        fps: f64,
    ) -> Result<(), KinematicsError> {
        self.animation
            .set(frame_start, frame_end, frame_offset_y, fps)
            .inspect_err(|err| warn!(%err, "animation change rejected"))
    }

    /// Bring a dead entity back at its spawn point.
    ///
    /// Only the dead and moving flags and the position are reset. Velocity,
    /// bounding box and animation carry over; call [`Entity::clear_motion`]
    /// as well for a standing start.
    pub fn resurrect(&mut self) {
        self.flags.dead = false;
        self.flags.moving = false;
        self.position = self.initial_position;
        debug!(x = self.position.x, y = self.position.y, "entity resurrected");
    }

    /// Zero both velocities and the vertical distance.
    pub fn clear_motion(&mut self) {
        self.velocity = DVec2::ZERO;
        self.distance_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Direction;

    #[test]
    fn new_entity_has_documented_defaults() {
        let e = Entity::new(16, 24, DVec2::new(32.0, 40.0), 320).unwrap();
        assert_eq!(e.width(), 16);
        assert_eq!(e.height(), 24);
        assert_eq!(e.map_width(), 320);
        assert_eq!(e.position, DVec2::new(32.0, 40.0));
        assert_eq!(e.initial_position(), DVec2::new(32.0, 40.0));
        assert_eq!(e.velocity, DVec2::ZERO);
        assert_eq!(e.distance_y, 0.0);
        assert_eq!(e.motion.acceleration, 400.0);
        assert_eq!(e.motion.deceleration, 200.0);
        assert_eq!(e.motion.max_velocity_x, 100.0);
        assert_eq!(e.motion.world_meter_in_pixel, 48.0);
        assert_eq!(e.motion.world_gravitation, 9.81);
        assert_eq!(e.animation, SpriteAnimation::default());
        assert_eq!(e.flags, EntityFlags::default());
        assert_eq!(e.bounds.left, 32.0);
        assert_eq!(e.bounds.bottom, 64.0);
        assert!(e.sprite.is_none());
    }

    #[test]
    fn zero_extents_are_rejected() {
        assert!(matches!(
            Entity::new(0, 16, DVec2::ZERO, 320),
            Err(KinematicsError::InvalidExtents { width: 0, .. })
        ));
        assert!(Entity::new(16, 0, DVec2::ZERO, 320).is_err());
        assert!(Entity::new(16, 16, DVec2::ZERO, 0).is_err());
    }

    #[test]
    fn with_tuning_applies_motion_and_animation() {
        let mut tuning = Tuning::default();
        tuning.motion.max_velocity_x = 60.0;
        tuning.animation.frame_start = 3;
        tuning.animation.frame_end = 7;
        tuning.animation.fps = 12.0;

        let e = Entity::with_tuning(8, 8, DVec2::ZERO, 64, &tuning).unwrap();
        assert_eq!(e.motion.max_velocity_x, 60.0);
        assert_eq!(e.animation.frame_start(), 3);
        assert_eq!(e.animation.frame_end(), 7);
        assert_eq!(e.animation.fps(), 12.0);
    }

    #[test]
    fn resurrect_resets_position_and_flags_only() {
        let mut e = Entity::new(16, 16, DVec2::new(10.0, 20.0), 320).unwrap();
        e.position = DVec2::new(200.0, 96.0);
        e.refresh_bounds();
        e.velocity = DVec2::new(75.0, 3.0);
        e.flags.dead = true;
        e.flags.moving = true;
        e.flags.in_mid_air = true;
        e.flags.direction = Direction::Left;

        e.resurrect();

        assert_eq!(e.position, DVec2::new(10.0, 20.0));
        assert!(!e.flags.dead);
        assert!(!e.flags.moving);
        assert!(e.flags.in_mid_air);
        assert_eq!(e.flags.direction, Direction::Left);
        assert_eq!(e.velocity, DVec2::new(75.0, 3.0));
        assert_eq!(e.bounds.left, 200.0);
    }

    #[test]
    fn clear_motion_zeroes_velocity_and_distance() {
        let mut e = Entity::new(16, 16, DVec2::ZERO, 320).unwrap();
        e.velocity = DVec2::new(50.0, 12.0);
        e.distance_y = 0.4;
        e.clear_motion();
        assert_eq!(e.velocity, DVec2::ZERO);
        assert_eq!(e.distance_y, 0.0);
    }

    #[test]
    fn set_animation_validates() {
        let mut e = Entity::new(16, 16, DVec2::ZERO, 320).unwrap();
        e.set_animation(2, 5, 1, 10.0).unwrap();
        assert_eq!(e.animation.frame_offset_y(), 1);
        assert_eq!(
            e.set_animation(5, 2, 1, 10.0),
            Err(KinematicsError::InvalidFrameRange { start: 5, end: 2 })
        );
        assert_eq!(e.animation.frame_start(), 2);
    }
}
