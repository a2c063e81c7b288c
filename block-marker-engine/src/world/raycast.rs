use bevy::prelude::*;

use crate::marker::coord::BlockCoord;
use crate::marker::resolver::BlockQuery;
use crate::world::voxel_world::VoxelWorld;

/// Walks a ray through the voxel grid and returns the first occupied cell.
///
/// Fixed-step sampling with a step well below one cell, so a unit cell on the
/// ray cannot be skipped. One query per key press keeps this cheap.
pub fn raycast_solid(
    world: &VoxelWorld,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<BlockCoord> {
    let direction = direction.try_normalize()?;
    let step = constants::interaction::PICK_RAY_STEP;
    let mut travelled = 0.0;
    let mut last_cell: Option<BlockCoord> = None;
    while travelled <= max_distance {
        let cell = BlockCoord::containing(origin + direction * travelled);
        if last_cell != Some(cell) {
            if !world.is_empty(cell) {
                return Some(cell);
            }
            last_cell = Some(cell);
        }
        travelled += step;
    }
    None
}
