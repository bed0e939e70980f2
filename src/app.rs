use std::path::Path;

use hecs::World;
use sdl2::render::TextureCreator;
use sdl2::video::WindowContext;
use sdl2::Sdl;
use tracing::{info, warn};

use crate::camera::Camera;
use crate::components::Entity;
use crate::engine::input::InputState;
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::error::RenderError;
use crate::renderer::{SpriteRenderer, SpriteStore};
use crate::systems::kinematics_system;

/// Fixed step used when running without a window.
pub const HEADLESS_DT: f64 = 1.0 / 60.0;

pub struct GameApp<'r> {
    world: World,
    focus: hecs::Entity,
    camera: Camera,
    renderer: SpriteRenderer,
    sprites: SpriteStore<'r>,
}

impl<'r> GameApp<'r> {
    pub fn new(world: World, focus: hecs::Entity, window: &GameWindow) -> Self {
        let (w, h) = window.size();
        Self {
            world,
            focus,
            camera: Camera::new(w, h),
            renderer: SpriteRenderer::new(),
            sprites: SpriteStore::new(),
        }
    }

    /// Load the same sprite sheet for every entity. Entities whose load fails
    /// stay without a sprite and are reported by the draw pass.
    pub fn load_sprites(
        &mut self,
        creator: &'r TextureCreator<WindowContext>,
        path: &Path,
    ) -> Result<(), RenderError> {
        let mut last_err = None;
        for (_e, entity) in self.world.query_mut::<&mut Entity>() {
            if let Err(err) = self.sprites.load_for(entity, creator, path) {
                last_err = Some(err);
            }
        }
        match last_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn run(&mut self, sdl: &Sdl, window: &mut GameWindow) -> Result<(), RenderError> {
        let mut event_pump = sdl.event_pump().map_err(RenderError::Sdl)?;
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();
        let mut frames: u64 = 0;

        loop {
            timer.tick();
            input.update(&mut event_pump);
            if input.should_quit() {
                break;
            }

            kinematics_system(&mut self.world, timer.dt);

            if let Ok(entity) = self.world.get::<&Entity>(self.focus) {
                self.camera.follow(&entity);
            }

            let failed =
                self.renderer
                    .draw_scene(window.canvas_mut(), &self.world, &self.sprites, &self.camera);
            if failed > 0 && frames == 0 {
                warn!(failed, "some entities could not be drawn");
            }

            window.present();
            frames += 1;
        }

        info!(frames, "frame loop finished");
        Ok(())
    }
}

/// Step the world `frames` times at [`HEADLESS_DT`] and log where the focus
/// entity ended up.
pub fn run_headless(world: &mut World, focus: hecs::Entity, frames: u32) {
    for _ in 0..frames {
        kinematics_system(world, HEADLESS_DT);
    }

    match world.get::<&Entity>(focus) {
        Ok(entity) => info!(
            frames,
            x = entity.position.x,
            y = entity.position.y,
            velocity_x = entity.velocity.x,
            velocity_y = entity.velocity.y,
            frame = entity.animation.frame(),
            frame_duration = entity.animation.frame_duration(),
            "headless run finished"
        ),
        Err(_) => warn!(frames, "focus entity missing after headless run"),
    }
}
