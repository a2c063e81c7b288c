use crate::marker::resolver::{BedPart, ChestSide, Facing, StructureAttributes, VerticalHalf};

/// Every block kind the demo world can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Grass,
    Stone,
    Planks,
    Bricks,
    Door { half: VerticalHalf, facing: Facing },
    TallPlant { half: VerticalHalf },
    Bed { part: BedPart, facing: Facing },
    Chest { facing: Facing, side: Option<ChestSide> },
}

impl BlockKind {
    /// Structure attributes exposed to the link resolver.
    pub fn attributes(&self) -> StructureAttributes {
        match self {
            BlockKind::Grass | BlockKind::Stone | BlockKind::Planks | BlockKind::Bricks => {
                StructureAttributes::default()
            }
            BlockKind::Door { half, facing } => StructureAttributes {
                vertical_half: Some(*half),
                facing: Some(*facing),
                ..Default::default()
            },
            BlockKind::TallPlant { half } => StructureAttributes {
                vertical_half: Some(*half),
                ..Default::default()
            },
            BlockKind::Bed { part, facing } => StructureAttributes {
                bed_part: Some(*part),
                facing: Some(*facing),
                ..Default::default()
            },
            BlockKind::Chest { facing, side } => StructureAttributes {
                chest_side: *side,
                facing: Some(*facing),
                ..Default::default()
            },
        }
    }
}
