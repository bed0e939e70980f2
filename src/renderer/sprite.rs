use std::path::Path;

use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use tracing::{debug, error};

use crate::components::{Entity, SpriteHandle};
use crate::error::RenderError;

/// Owns every loaded sprite texture. Entities refer to them by [`SpriteHandle`].
/// Released slots are reused by later loads.
pub struct SpriteStore<'r> {
    textures: Vec<Option<Texture<'r>>>,
}

impl<'r> SpriteStore<'r> {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
        }
    }

    pub fn get(&self, handle: SpriteHandle) -> Option<&Texture<'r>> {
        self.textures.get(handle.0).and_then(Option::as_ref)
    }

    /// Drop the texture behind `handle`. Unknown handles are ignored.
    pub fn release(&mut self, handle: SpriteHandle) {
        if let Some(slot) = self.textures.get_mut(handle.0) {
            *slot = None;
        }
    }

    /// Load a BMP sprite sheet for `entity`, replacing its current sprite.
    ///
    /// The previous texture is released before loading. On failure the entity
    /// is left without a sprite.
    pub fn load_for(
        &mut self,
        entity: &mut Entity,
        creator: &'r TextureCreator<WindowContext>,
        path: &Path,
    ) -> Result<SpriteHandle, RenderError> {
        if let Some(old) = entity.sprite.take() {
            self.release(old);
        }

        let texture = load_texture(creator, path).map_err(|reason| {
            error!(path = %path.display(), %reason, "sprite load failed");
            RenderError::SpriteUnavailable {
                path: path.to_path_buf(),
                reason,
            }
        })?;

        let handle = self.insert(texture);
        entity.sprite = Some(handle);
        debug!(path = %path.display(), handle = handle.0, "sprite loaded");
        Ok(handle)
    }

    fn insert(&mut self, texture: Texture<'r>) -> SpriteHandle {
        if let Some(index) = self.textures.iter().position(Option::is_none) {
            self.textures[index] = Some(texture);
            return SpriteHandle(index);
        }
        self.textures.push(Some(texture));
        SpriteHandle(self.textures.len() - 1)
    }
}

fn load_texture<'r>(
    creator: &'r TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'r>, String> {
    let surface = Surface::load_bmp(path)?;
    creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())
}
