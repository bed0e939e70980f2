use glam::DVec2;
use hecs::World;
use tracing::debug;

use crate::components::{Direction, Entity};
use crate::config::Tuning;
use crate::error::KinematicsError;

/// Everything needed to construct an entity, plus the flags it starts with.
#[derive(Debug, Clone, Copy)]
pub struct EntitySpawn {
    pub width: u32,
    pub height: u32,
    pub position: DVec2,
    pub map_width: u32,
    pub direction: Direction,
    pub moving: bool,
    pub in_mid_air: bool,
}

impl EntitySpawn {
    pub fn build(&self, tuning: &Tuning) -> Result<Entity, KinematicsError> {
        let mut entity =
            Entity::with_tuning(self.width, self.height, self.position, self.map_width, tuning)?;
        entity.flags.direction = self.direction;
        entity.flags.moving = self.moving;
        entity.flags.in_mid_air = self.in_mid_air;
        Ok(entity)
    }
}

/// Construct an entity from `spawn` and add it to the world.
pub fn spawn_entity(
    world: &mut World,
    spawn: &EntitySpawn,
    tuning: &Tuning,
) -> Result<hecs::Entity, KinematicsError> {
    let entity = spawn.build(tuning)?;
    let handle = world.spawn((entity,));
    debug!(?handle, x = spawn.position.x, y = spawn.position.y, "entity spawned");
    Ok(handle)
}
