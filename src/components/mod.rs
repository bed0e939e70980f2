mod animation;
mod bounds;
mod entity;
mod flags;
mod motion;
mod render;

pub use animation::SpriteAnimation;
pub use bounds::BoundingBox;
pub use entity::Entity;
pub use flags::{Direction, EntityFlags};
pub use motion::MotionTuning;
pub use render::SpriteHandle;
