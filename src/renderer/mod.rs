pub mod sprite;

use hecs::World;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::error;

use crate::camera::Camera;
use crate::components::{Direction, Entity};
use crate::error::RenderError;
pub use sprite::SpriteStore;

/// Where to sample the sprite sheet and where to put it on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRegions {
    pub src: Rect,
    pub dst: Rect,
    /// Mirror horizontally (entity faces left).
    pub flip_horizontal: bool,
}

/// Sheet column = animation frame, sheet row = frame offset Y, both in units
/// of the entity's extents. Screen position is truncated to whole pixels.
pub fn sprite_regions(entity: &Entity, camera: &Camera) -> SpriteRegions {
    let (width, height) = (entity.width(), entity.height());
    let screen = camera.to_screen(entity.position);
    let anim = &entity.animation;

    SpriteRegions {
        src: Rect::new(
            sheet_offset(anim.frame(), width),
            sheet_offset(anim.frame_offset_y(), height),
            width,
            height,
        ),
        dst: Rect::new(screen.x as i32, screen.y as i32, width, height),
        flip_horizontal: entity.flags.direction == Direction::Left,
    }
}

/// Pixel offset of cell `index` in a sheet of `extent`-sized cells,
/// saturating at `i32::MAX`.
fn sheet_offset(index: u32, extent: u32) -> i32 {
    let offset = i64::from(index) * i64::from(extent);
    i32::try_from(offset).unwrap_or(i32::MAX)
}

pub struct SpriteRenderer {
    clear_color: Color,
}

impl SpriteRenderer {
    pub fn new() -> Self {
        Self {
            clear_color: Color::RGB(24, 24, 36),
        }
    }

    pub fn begin_frame(&self, canvas: &mut Canvas<Window>) {
        canvas.set_draw_color(self.clear_color);
        canvas.clear();
    }

    pub fn draw_entity(
        &self,
        canvas: &mut Canvas<Window>,
        sprites: &SpriteStore,
        entity: &Entity,
        camera: &Camera,
    ) -> Result<(), RenderError> {
        let texture = entity
            .sprite
            .and_then(|handle| sprites.get(handle))
            .ok_or(RenderError::SpriteNotLoaded)?;

        let regions = sprite_regions(entity, camera);
        canvas
            .copy_ex(
                texture,
                regions.src,
                regions.dst,
                0.0,
                None::<Point>,
                regions.flip_horizontal,
                false,
            )
            .map_err(RenderError::Sdl)
    }

    /// Draw every living entity. Failures are logged and skipped; returns how
    /// many entities could not be drawn.
    pub fn draw_scene(
        &self,
        canvas: &mut Canvas<Window>,
        world: &World,
        sprites: &SpriteStore,
        camera: &Camera,
    ) -> usize {
        self.begin_frame(canvas);

        let mut failed = 0;
        for (handle, entity) in world.query::<&Entity>().iter() {
            if entity.flags.dead {
                continue;
            }
            if let Err(err) = self.draw_entity(canvas, sprites, entity, camera) {
                error!(entity = ?handle, %err, "draw failed");
                failed += 1;
            }
        }
        failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn regions_sample_frame_column_and_offset_row() {
        let mut entity = Entity::new(16, 24, DVec2::new(100.0, 40.0), 320).unwrap();
        entity.set_animation(3, 6, 2, 10.0).unwrap();
        entity.animation.advance(0.0);
        let camera = Camera::new(320, 240);

        let regions = sprite_regions(&entity, &camera);
        assert_eq!(regions.src, Rect::new(48, 48, 16, 24));
        assert_eq!(regions.dst, Rect::new(100, 40, 16, 24));
        assert!(!regions.flip_horizontal);
    }

    #[test]
    fn sheet_offset_saturates_instead_of_overflowing() {
        assert_eq!(sheet_offset(3, 16), 48);
        assert_eq!(sheet_offset(0, u32::MAX), 0);
        assert_eq!(sheet_offset(u32::MAX, 16), i32::MAX);
        assert_eq!(sheet_offset(200_000_000, 16), i32::MAX);
    }

    #[test]
    fn regions_for_last_frame_of_a_huge_range_do_not_panic() {
        let mut entity = Entity::new(16, 16, DVec2::ZERO, 320).unwrap();
        entity.set_animation(u32::MAX - 1, u32::MAX, u32::MAX, 10.0).unwrap();
        entity.animation.advance(0.0);
        assert_eq!(entity.animation.frame(), u32::MAX - 1);

        let regions = sprite_regions(&entity, &Camera::new(320, 240));
        assert_eq!(regions.src.width(), 16);
        assert!(regions.src.x() > 0);
        assert!(regions.src.y() > 0);
    }

    #[test]
    fn regions_subtract_camera_and_truncate() {
        let mut entity = Entity::new(16, 16, DVec2::new(100.75, 40.5), 320).unwrap();
        entity.flags.direction = Direction::Left;
        let mut camera = Camera::new(320, 240);
        camera.position = DVec2::new(50.0, 10.0);

        let regions = sprite_regions(&entity, &camera);
        assert_eq!(regions.dst, Rect::new(50, 30, 16, 16));
        assert!(regions.flip_horizontal);
    }
}
