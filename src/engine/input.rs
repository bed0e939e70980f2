use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;

/// Window events the frame loop reacts to. Gameplay input is not read here;
/// entity flags are driven by whoever owns the entity.
pub struct InputState {
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self { quit: false }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                _ => {}
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
