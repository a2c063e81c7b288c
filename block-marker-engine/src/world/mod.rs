//! Demo voxel world the marker tool operates on.

pub mod block;
pub mod raycast;
pub mod voxel_world;
