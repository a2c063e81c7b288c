/// Default maximum distance (cells) at which highlight boxes are drawn.
pub const DEFAULT_RENDER_DISTANCE: u32 = 96;

/// Lower bound for the configurable highlight render distance.
pub const MIN_RENDER_DISTANCE: u32 = 8;

/// Upper bound for the configurable highlight render distance.
pub const MAX_RENDER_DISTANCE: u32 = 512;

/// Step applied when nudging the render distance from the keyboard.
pub const RENDER_DISTANCE_STEP: u32 = 8;

/// Default opacity of highlight box lines.
pub const DEFAULT_HIGHLIGHT_ALPHA: f32 = 0.8;

/// Lower bound for highlight opacity.
pub const MIN_HIGHLIGHT_ALPHA: f32 = 0.05;

/// Upper bound for highlight opacity.
pub const MAX_HIGHLIGHT_ALPHA: f32 = 1.0;

/// Outward inflation of each highlight box so the lines sit clear of block faces.
pub const HIGHLIGHT_BOX_INFLATE: f32 = 0.002;
