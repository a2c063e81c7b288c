//! Scene construction for the demo voxel world.
//!
//! Populates the block grid with terrain and multi-block structures,
//! then spawns the meshes that make them visible.

/// Demo world population and block mesh spawning.
///
/// Builds a small village scene with doors, beds, chests, and plants
/// so every pairing rule has something to resolve against.
pub mod world_setup;
