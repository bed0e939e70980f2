mod kinematics;

pub use kinematics::{kinematics_system, snap_to_ground_grid, update_entity, GROUND_GRID};
