/// Maximum distance (cells) from which a block can be targeted.
pub const PICK_REACH: f32 = 5.0;

/// Sampling step for the targeting ray walk (cells).
pub const PICK_RAY_STEP: f32 = 0.05;
