use glam::DVec2;
use hecs::World;

use super::prefabs::{spawn_entity, EntitySpawn};
use crate::config::Tuning;
use crate::error::KinematicsError;

/// Populate the demo world: the focus entity described by `focus`, plus a
/// walker heading the other way and one dropping from above, both sharing the
/// focus entity's extents and map.
/// Returns the focus entity.
pub fn load_demo_scene(
    world: &mut World,
    focus: &EntitySpawn,
    tuning: &Tuning,
) -> Result<hecs::Entity, KinematicsError> {
    let map_width = f64::from(focus.map_width);

    let player = spawn_entity(world, focus, tuning)?;

    spawn_entity(
        world,
        &EntitySpawn {
            position: DVec2::new((focus.position.x + map_width * 0.5) % map_width, focus.position.y),
            direction: focus.direction.flipped(),
            moving: true,
            in_mid_air: false,
            ..*focus
        },
        tuning,
    )?;

    spawn_entity(
        world,
        &EntitySpawn {
            position: DVec2::new((focus.position.x + map_width * 0.25) % map_width, 0.0),
            moving: false,
            in_mid_air: true,
            ..*focus
        },
        tuning,
    )?;

    Ok(player)
}
