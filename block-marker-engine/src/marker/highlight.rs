use bevy::prelude::*;
use std::collections::HashSet;

use crate::marker::coord::BlockCoord;
use crate::marker::store::CoordStore;

/// Render-facing mirror of the marked coordinate set.
///
/// Starts inactive and empty. While active it follows the store exclusively
/// through the change deltas of successful batch mutations; activation is the
/// only full resynchronisation point. Membership checks use the set, drawing
/// walks the insertion-ordered list.
#[derive(Resource, Default)]
pub struct HighlightCache {
    enabled: bool,
    members: HashSet<BlockCoord>,
    ordered: Vec<BlockCoord>,
}

impl HighlightCache {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, pos: &BlockCoord) -> bool {
        self.members.contains(pos)
    }

    /// Flips highlighting and returns the new state.
    ///
    /// Activation repopulates from the store snapshot; deactivation leaves the
    /// cached content untouched since nothing reads it while inactive.
    pub fn toggle(&mut self, store: &CoordStore) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.members = store.snapshot();
            self.ordered = self.members.iter().copied().collect();
        }
        self.enabled
    }

    /// Registers freshly stored coordinates. No-op while inactive.
    pub fn apply_added(&mut self, added: &HashSet<BlockCoord>) {
        if !self.enabled {
            return;
        }
        for pos in added {
            if self.members.insert(*pos) {
                self.ordered.push(*pos);
            }
        }
    }

    /// Drops freshly removed coordinates. No-op while inactive.
    pub fn apply_removed(&mut self, removed: &HashSet<BlockCoord>) {
        if !self.enabled || removed.is_empty() {
            return;
        }
        for pos in removed {
            self.members.remove(pos);
        }
        self.ordered.retain(|pos| !removed.contains(pos));
    }

    /// Members whose cell centres lie within `max_distance` of `observer`,
    /// in insertion order. Yields nothing while inactive.
    pub fn iter_within(
        &self,
        observer: Vec3,
        max_distance: f32,
    ) -> impl Iterator<Item = BlockCoord> + '_ {
        let enabled = self.enabled;
        let limit = max_distance * max_distance;
        self.ordered
            .iter()
            .copied()
            .filter(move |pos| enabled && pos.center().distance_squared(observer) <= limit)
    }
}
