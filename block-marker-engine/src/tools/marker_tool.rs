use bevy::prelude::*;

use crate::marker::coord::BlockCoord;
use crate::marker::highlight::HighlightCache;
use crate::marker::resolver::resolve;
use crate::marker::store::{BatchOutcome, BatchStatus, CoordStore};
use crate::tools::feedback::StatusEvent;
use crate::world::raycast::raycast_solid;
use crate::world::voxel_world::VoxelWorld;
use constants::interaction::PICK_REACH;

/// Keyboard entry point for marking blocks.
///
/// Arrow Up stores the targeted structure, Arrow Down removes it, H toggles
/// highlighting. Every path answers with exactly one status message.
pub fn marker_tool_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut store: ResMut<CoordStore>,
    mut cache: ResMut<HighlightCache>,
    world: Res<VoxelWorld>,
    cameras: Query<&Transform, With<Camera3d>>,
    mut status: EventWriter<StatusEvent>,
) {
    let toggle_pressed = keyboard.just_pressed(KeyCode::KeyH);
    let store_pressed = keyboard.just_pressed(KeyCode::ArrowUp);
    let remove_pressed = keyboard.just_pressed(KeyCode::ArrowDown);
    if !toggle_pressed && !store_pressed && !remove_pressed {
        return;
    }

    if toggle_pressed {
        if !store.ensure_loaded() {
            status.send(StatusEvent::file_error("load", &store.file_name()));
            return;
        }
        let enabled = cache.toggle(&store);
        status.send(StatusEvent::highlight_toggled(enabled));
        return;
    }

    if !store.ensure_loaded() {
        status.send(StatusEvent::file_error("load", &store.file_name()));
        return;
    }

    let Ok(camera_transform) = cameras.single() else {
        return;
    };
    let Some(target) = raycast_solid(
        &world,
        camera_transform.translation,
        camera_transform.forward().as_vec3(),
        PICK_REACH,
    ) else {
        status.send(StatusEvent::no_target());
        return;
    };

    // The full structure is marked or unmarked as one unit.
    let structure = resolve(&*world, target);
    let resolved = structure.len();
    let file_name = store.file_name();

    if store_pressed {
        let outcome = store.store_all(&structure);
        handle_store(&mut status, &mut cache, target, resolved, &file_name, outcome);
    } else {
        let outcome = store.remove_all(&structure);
        handle_remove(&mut status, &mut cache, target, resolved, &file_name, outcome);
    }
}

/// Performs the store's one-time load at startup, so the HUD counter starts
/// from the persisted set rather than an empty one.
///
/// A failed read leaves the store unloaded; the next marker action retries and
/// reports the error to the user.
pub fn preload_coord_store(mut store: ResMut<CoordStore>) {
    store.ensure_loaded();
}

fn handle_store(
    status: &mut EventWriter<StatusEvent>,
    cache: &mut HighlightCache,
    anchor: BlockCoord,
    resolved: usize,
    file_name: &str,
    outcome: BatchOutcome,
) {
    match outcome.status {
        BatchStatus::IoError => {
            status.send(StatusEvent::file_error("edit", file_name));
        }
        BatchStatus::AlreadyExists => {
            status.send(StatusEvent::already_stored(anchor, resolved));
        }
        _ => {
            status.send(StatusEvent::stored(anchor, resolved));
            if !outcome.changed.is_empty() {
                cache.apply_added(&outcome.changed);
            }
        }
    }
}

fn handle_remove(
    status: &mut EventWriter<StatusEvent>,
    cache: &mut HighlightCache,
    anchor: BlockCoord,
    resolved: usize,
    file_name: &str,
    outcome: BatchOutcome,
) {
    match outcome.status {
        BatchStatus::IoError => {
            status.send(StatusEvent::file_error("edit", file_name));
        }
        BatchStatus::NotFound => {
            status.send(StatusEvent::not_stored(anchor, resolved));
        }
        _ => {
            status.send(StatusEvent::removed(anchor, resolved));
            if !outcome.changed.is_empty() {
                cache.apply_removed(&outcome.changed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn startup_preload_reads_the_persisted_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coords.json");

        let mut seed = CoordStore::new(path.clone());
        let coords = HashSet::from([BlockCoord::new(4, 64, 4), BlockCoord::new(4, 65, 4)]);
        assert_eq!(seed.store_all(&coords).status, BatchStatus::Ok);

        let mut app = App::new();
        app.insert_resource(CoordStore::new(path));
        app.add_systems(Startup, preload_coord_store);
        app.update();

        let store = app.world().resource::<CoordStore>();
        assert!(store.is_loaded());
        assert_eq!(store.len(), 2);
    }
}
