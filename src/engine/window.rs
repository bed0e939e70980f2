use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::Sdl;

use crate::error::RenderError;

pub struct GameWindow {
    canvas: Canvas<Window>,
}

impl GameWindow {
    pub fn new(sdl: &Sdl, title: &str, width: u32, height: u32) -> Result<Self, RenderError> {
        let video = sdl.video().map_err(RenderError::Sdl)?;

        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| RenderError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| RenderError::Sdl(e.to_string()))?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));

        Ok(Self { canvas })
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<Window> {
        &mut self.canvas
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }
}
