use bevy::prelude::*;

use crate::marker::coord::BlockCoord;
use crate::marker::resolver::Facing;
use crate::world::block::BlockKind;
use crate::world::voxel_world::VoxelWorld;

/// Populates the demo world and spawns one cube entity per block.
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut world: ResMut<VoxelWorld>,
) {
    populate_demo_world(&mut world);
    spawn_block_meshes(&mut commands, &mut meshes, &mut materials, &world);
    info!("Demo world populated with {} block(s)", world.iter().count());
}

/// A small scene with every structure kind the resolver understands.
pub fn populate_demo_world(world: &mut VoxelWorld) {
    // Grass floor with a stone path crossing it.
    for x in -12..12 {
        for z in -12..12 {
            let kind = if z == 0 || x == 3 {
                BlockKind::Stone
            } else {
                BlockKind::Grass
            };
            world.set(BlockCoord::new(x, 0, z), kind);
        }
    }

    // A brick wall segment with a doorway.
    for x in -2..5 {
        for y in 1..4 {
            if x == 2 && y < 3 {
                continue; // doorway
            }
            world.set(BlockCoord::new(x, y, 6), BlockKind::Bricks);
        }
    }
    world.place_door(BlockCoord::new(2, 1, 6), Facing::South);

    // Furniture in front of the wall.
    world.place_bed(BlockCoord::new(-5, 1, 2), Facing::East);
    world.place_bed(BlockCoord::new(6, 1, -3), Facing::North);
    world.place_double_chest(BlockCoord::new(-2, 1, -5), Facing::North);
    world.set(
        BlockCoord::new(1, 1, -5),
        BlockKind::Chest {
            facing: Facing::North,
            side: None,
        },
    );

    // Plants along the path.
    world.place_tall_plant(BlockCoord::new(-3, 1, 4));
    world.place_tall_plant(BlockCoord::new(5, 1, 1));
    world.place_tall_plant(BlockCoord::new(-8, 1, -2));

    // A planks platform with a stone pillar.
    for x in 7..10 {
        for z in 3..6 {
            world.set(BlockCoord::new(x, 1, z), BlockKind::Planks);
        }
    }
    for y in 1..5 {
        world.set(BlockCoord::new(-9, y, -8), BlockKind::Stone);
    }
}

fn spawn_block_meshes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    world: &VoxelWorld,
) {
    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));

    // One shared material per block kind.
    let grass = materials.add(block_material(Color::srgb(0.36, 0.60, 0.26)));
    let stone = materials.add(block_material(Color::srgb(0.52, 0.52, 0.55)));
    let planks = materials.add(block_material(Color::srgb(0.65, 0.48, 0.28)));
    let bricks = materials.add(block_material(Color::srgb(0.62, 0.30, 0.25)));
    let door = materials.add(block_material(Color::srgb(0.48, 0.33, 0.17)));
    let plant = materials.add(block_material(Color::srgb(0.22, 0.65, 0.30)));
    let bed = materials.add(block_material(Color::srgb(0.75, 0.22, 0.25)));
    let chest = materials.add(block_material(Color::srgb(0.72, 0.53, 0.23)));

    for (pos, kind) in world.iter() {
        let material = match kind {
            BlockKind::Grass => grass.clone(),
            BlockKind::Stone => stone.clone(),
            BlockKind::Planks => planks.clone(),
            BlockKind::Bricks => bricks.clone(),
            BlockKind::Door { .. } => door.clone(),
            BlockKind::TallPlant { .. } => plant.clone(),
            BlockKind::Bed { .. } => bed.clone(),
            BlockKind::Chest { .. } => chest.clone(),
        };
        commands.spawn((
            Mesh3d(cube.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(pos.center()),
        ));
    }
}

fn block_material(base_color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color,
        perceptual_roughness: 0.9,
        ..default()
    }
}
