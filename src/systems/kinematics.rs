use hecs::World;
use tracing::trace;

use crate::components::Entity;

/// Grounded entities rest on multiples of this many pixels.
pub const GROUND_GRID: f64 = 8.0;

/// Advance one entity by `dt` seconds.
///
/// Step order matters, each step reads what the previous one wrote:
/// bounding box from the pre-motion position, horizontal speed, horizontal
/// displacement, gravity or ground snap, horizontal wrap, animation.
///
/// Gravity uses `g * dt²` per frame as displacement added to the vertical
/// velocity, which in turn is added to the position as-is. This is not a
/// physically exact integration and there is no terminal velocity; the
/// resulting fall curve is the intended motion feel.
pub fn update_entity(entity: &mut Entity, dt: f64) {
    debug_assert!(dt >= 0.0, "negative frame delta {dt}");

    entity.refresh_bounds();
    integrate_speed(entity, dt);
    apply_horizontal_displacement(entity, dt);

    if entity.flags.in_mid_air {
        apply_gravity(entity, dt);
    } else {
        entity.position.y = snap_to_ground_grid(entity.position.y);
    }

    wrap_horizontal(entity);
    entity.animation.advance(dt);
}

/// Run [`update_entity`] for every living entity in the world.
pub fn kinematics_system(world: &mut World, dt: f64) {
    for (_e, entity) in world.query_mut::<&mut Entity>() {
        if entity.flags.dead {
            continue;
        }
        update_entity(entity, dt);
    }
}

fn integrate_speed(entity: &mut Entity, dt: f64) {
    let motion = &entity.motion;
    if entity.flags.moving {
        entity.velocity.x += motion.acceleration * dt;
    } else {
        entity.velocity.x -= motion.deceleration * dt;
    }
    // Cap first, then floor: speed never goes negative even if the cap does.
    entity.velocity.x = entity.velocity.x.min(motion.max_velocity_x).max(0.0);
}

fn apply_horizontal_displacement(entity: &mut Entity, dt: f64) {
    if entity.velocity.x <= 0.0 {
        return;
    }
    entity.position.x += entity.flags.direction.sign() * entity.velocity.x * dt;
}

fn apply_gravity(entity: &mut Entity, dt: f64) {
    let g = entity.motion.gravity();
    entity.distance_y = g * dt * dt;
    entity.velocity.y += entity.distance_y;
    entity.position.y += entity.velocity.y;
}

/// Move `y` down (toward negative infinity) onto the ground grid.
///
/// Same result as repeatedly flooring `y` and stepping one pixel down while
/// either its truncation toward zero or its floor is off the
/// [`GROUND_GRID`], computed in one step so it terminates for every input.
/// A `y` whose truncation and floor are both on the grid keeps its fractional
/// part. A negative `y` with a fractional part always steps, so `-7.25`
/// lands on `-16`. Non-finite input is returned unchanged.
pub fn snap_to_ground_grid(y: f64) -> f64 {
    if !y.is_finite() {
        return y;
    }
    let floor = y.floor();
    let on_grid = |v: f64| v.rem_euclid(GROUND_GRID) == 0.0;
    if on_grid(y.trunc()) && on_grid(floor) {
        return y;
    }
    let stepped = floor - 1.0;
    stepped - stepped.rem_euclid(GROUND_GRID)
}

/// Join the left and right map edges. Both checks run every frame.
fn wrap_horizontal(entity: &mut Entity) {
    let width = f64::from(entity.width());
    let right_limit = f64::from(entity.map_width()) - width;

    if entity.position.x < -width {
        trace!(from = entity.position.x, to = right_limit, "wrapped past left edge");
        entity.position.x = right_limit;
    }
    if entity.position.x > right_limit {
        trace!(from = entity.position.x, to = -width, "wrapped past right edge");
        entity.position.x = -width;
    }
}
