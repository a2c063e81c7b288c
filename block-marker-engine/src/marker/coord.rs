use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer position of one block cell in world space.
///
/// The cell with coordinate `(x, y, z)` spans the unit cube from `(x, y, z)`
/// to `(x + 1, y + 1, z + 1)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell directly above.
    pub fn above(&self) -> Self {
        Self::new(self.x, self.y + 1, self.z)
    }

    /// Cell directly below.
    pub fn below(&self) -> Self {
        Self::new(self.x, self.y - 1, self.z)
    }

    /// Cell offset by the given deltas.
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Midpoint of the cell in world space.
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }

    /// Cell containing the given world-space point.
    pub fn containing(point: Vec3) -> Self {
        Self::new(
            point.x.floor() as i32,
            point.y.floor() as i32,
            point.z.floor() as i32,
        )
    }
}

impl fmt::Display for BlockCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
