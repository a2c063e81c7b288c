use std::collections::HashSet;

use crate::marker::coord::BlockCoord;

/// Horizontal facing of a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// Unit offset along the facing axis as `(dx, dz)`. North is negative z.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::East => (1, 0),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
        }
    }

    pub fn opposite(&self) -> Facing {
        match self {
            Facing::North => Facing::South,
            Facing::East => Facing::West,
            Facing::South => Facing::North,
            Facing::West => Facing::East,
        }
    }

    /// Next facing going clockwise when viewed from above.
    pub fn clockwise(&self) -> Facing {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    pub fn counter_clockwise(&self) -> Facing {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }
}

/// Which half of a two-cell-tall structure a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalHalf {
    Lower,
    Upper,
}

/// Which end of a two-cell-long piece of furniture a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedPart {
    Foot,
    Head,
}

/// Which side of a sideways pair a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChestSide {
    Left,
    Right,
}

/// Structure attributes a world exposes for one cell.
///
/// Every field is optional; plain blocks carry an empty bag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureAttributes {
    pub vertical_half: Option<VerticalHalf>,
    pub bed_part: Option<BedPart>,
    pub facing: Option<Facing>,
    pub chest_side: Option<ChestSide>,
}

/// World-query capability the resolver reads through.
pub trait BlockQuery {
    /// Structure attributes of the block at `pos`.
    fn attributes_of(&self, pos: BlockCoord) -> StructureAttributes;
    /// Whether `pos` holds no block at all.
    fn is_empty(&self, pos: BlockCoord) -> bool;
}

/// How one cell participates in a multi-cell structure.
///
/// Closed set: every attribute bag collapses into exactly one variant, and
/// bags that fit no pairing rule (including inconsistent ones, such as a side
/// with no facing) collapse to `Lone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairRule {
    Lone,
    Vertical(VerticalHalf),
    Lengthwise(BedPart, Facing),
    Sideways(ChestSide, Facing),
}

fn classify(attrs: &StructureAttributes) -> PairRule {
    match (
        attrs.vertical_half,
        attrs.bed_part,
        attrs.chest_side,
        attrs.facing,
    ) {
        (Some(half), _, _, _) => PairRule::Vertical(half),
        (None, Some(part), _, Some(facing)) => PairRule::Lengthwise(part, facing),
        (None, None, Some(side), Some(facing)) => PairRule::Sideways(side, facing),
        _ => PairRule::Lone,
    }
}

/// Expands `anchor` to the full cell set of the structure it belongs to.
///
/// The result always contains `anchor`. Reads the world, never writes it.
pub fn resolve(query: &impl BlockQuery, anchor: BlockCoord) -> HashSet<BlockCoord> {
    let partner = match classify(&query.attributes_of(anchor)) {
        PairRule::Lone => None,
        PairRule::Vertical(VerticalHalf::Lower) => Some(anchor.above()),
        PairRule::Vertical(VerticalHalf::Upper) => Some(anchor.below()),
        PairRule::Lengthwise(part, facing) => {
            let toward = match part {
                BedPart::Foot => facing,
                BedPart::Head => facing.opposite(),
            };
            let (dx, dz) = toward.delta();
            Some(anchor.offset(dx, 0, dz))
        }
        PairRule::Sideways(side, facing) => {
            let toward = match side {
                ChestSide::Left => facing.clockwise(),
                ChestSide::Right => facing.counter_clockwise(),
            };
            let (dx, dz) = toward.delta();
            Some(anchor.offset(dx, 0, dz))
        }
    };
    let mut cells = HashSet::from([anchor]);
    if let Some(partner) = partner {
        cells.insert(partner);
    }
    cells
}
