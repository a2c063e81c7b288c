use bevy::prelude::*;
use std::collections::HashMap;

use crate::marker::coord::BlockCoord;
use crate::marker::resolver::{
    BedPart, BlockQuery, ChestSide, Facing, StructureAttributes, VerticalHalf,
};
use crate::world::block::BlockKind;

/// Sparse voxel grid holding the demo scene.
#[derive(Resource, Default)]
pub struct VoxelWorld {
    blocks: HashMap<BlockCoord, BlockKind>,
}

impl VoxelWorld {
    pub fn set(&mut self, pos: BlockCoord, kind: BlockKind) {
        self.blocks.insert(pos, kind);
    }

    pub fn get(&self, pos: BlockCoord) -> Option<BlockKind> {
        self.blocks.get(&pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BlockCoord, &BlockKind)> {
        self.blocks.iter()
    }

    /// Places both halves of a door, lower half at `base`.
    pub fn place_door(&mut self, base: BlockCoord, facing: Facing) {
        self.set(
            base,
            BlockKind::Door {
                half: VerticalHalf::Lower,
                facing,
            },
        );
        self.set(
            base.above(),
            BlockKind::Door {
                half: VerticalHalf::Upper,
                facing,
            },
        );
    }

    /// Places both halves of a two-tall plant, lower half at `base`.
    pub fn place_tall_plant(&mut self, base: BlockCoord) {
        self.set(
            base,
            BlockKind::TallPlant {
                half: VerticalHalf::Lower,
            },
        );
        self.set(
            base.above(),
            BlockKind::TallPlant {
                half: VerticalHalf::Upper,
            },
        );
    }

    /// Places a bed with its foot at `foot`; the head lies one step along `facing`.
    pub fn place_bed(&mut self, foot: BlockCoord, facing: Facing) {
        let (dx, dz) = facing.delta();
        self.set(
            foot,
            BlockKind::Bed {
                part: BedPart::Foot,
                facing,
            },
        );
        self.set(
            foot.offset(dx, 0, dz),
            BlockKind::Bed {
                part: BedPart::Head,
                facing,
            },
        );
    }

    /// Places a double chest with its left half at `left`.
    pub fn place_double_chest(&mut self, left: BlockCoord, facing: Facing) {
        let (dx, dz) = facing.clockwise().delta();
        self.set(
            left,
            BlockKind::Chest {
                facing,
                side: Some(ChestSide::Left),
            },
        );
        self.set(
            left.offset(dx, 0, dz),
            BlockKind::Chest {
                facing,
                side: Some(ChestSide::Right),
            },
        );
    }
}

impl BlockQuery for VoxelWorld {
    fn attributes_of(&self, pos: BlockCoord) -> StructureAttributes {
        self.get(pos)
            .map(|kind| kind.attributes())
            .unwrap_or_default()
    }

    fn is_empty(&self, pos: BlockCoord) -> bool {
        !self.blocks.contains_key(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::resolver::resolve;
    use std::collections::HashSet;

    #[test]
    fn placed_door_resolves_as_one_structure_from_either_half() {
        let mut world = VoxelWorld::default();
        let base = BlockCoord::new(2, 1, 2);
        world.place_door(base, Facing::South);

        let expected = HashSet::from([base, base.above()]);
        assert_eq!(resolve(&world, base), expected);
        assert_eq!(resolve(&world, base.above()), expected);
    }

    #[test]
    fn placed_bed_resolves_as_one_structure_from_either_end() {
        let mut world = VoxelWorld::default();
        let foot = BlockCoord::new(0, 1, 0);
        world.place_bed(foot, Facing::East);

        let head = foot.offset(1, 0, 0);
        let expected = HashSet::from([foot, head]);
        assert_eq!(resolve(&world, foot), expected);
        assert_eq!(resolve(&world, head), expected);
    }

    #[test]
    fn placed_double_chest_resolves_as_one_structure_from_either_side() {
        let mut world = VoxelWorld::default();
        let left = BlockCoord::new(-3, 1, 7);
        world.place_double_chest(left, Facing::North);

        let right = left.offset(1, 0, 0);
        let expected = HashSet::from([left, right]);
        assert_eq!(resolve(&world, left), expected);
        assert_eq!(resolve(&world, right), expected);
    }

    #[test]
    fn empty_cells_report_empty_and_attribute_free() {
        let world = VoxelWorld::default();
        let pos = BlockCoord::new(1, 2, 3);
        assert!(world.is_empty(pos));
        assert_eq!(world.attributes_of(pos), StructureAttributes::default());
    }
}
