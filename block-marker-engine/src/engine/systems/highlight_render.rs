use bevy::prelude::*;

use crate::marker::highlight::HighlightCache;
use crate::settings::HighlightSettings;
use constants::render_settings::HIGHLIGHT_BOX_INFLATE;

/// Draws one line box per highlighted cell within the configured distance.
///
/// Runs every frame while highlighting is active; the cache keeps membership
/// current, so this is a plain filtered walk with no per-frame rebuilds.
pub fn draw_highlight_boxes(
    mut gizmos: Gizmos,
    cache: Res<HighlightCache>,
    settings: Res<HighlightSettings>,
    cameras: Query<&Transform, With<Camera3d>>,
) {
    if !cache.is_enabled() {
        return;
    }
    let Ok(camera_transform) = cameras.single() else {
        return;
    };

    let colour = settings.colour();
    // Slightly larger than the cell so the lines sit clear of block faces.
    let scale = Vec3::splat(1.0 + HIGHLIGHT_BOX_INFLATE * 2.0);
    let observer = camera_transform.translation;
    for pos in cache.iter_within(observer, settings.render_distance as f32) {
        gizmos.cuboid(
            Transform::from_translation(pos.center()).with_scale(scale),
            colour,
        );
    }
}
