/// Index into the SpriteStore resource. An entity without one has no sprite loaded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteHandle(pub usize);
