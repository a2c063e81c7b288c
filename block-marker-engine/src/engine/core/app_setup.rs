use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;

// Crate engine modules
use crate::engine::camera::fly_camera::{FlyCamera, camera_controller};
use crate::engine::scene::world_setup::setup_world;
use crate::engine::systems::highlight_render::draw_highlight_boxes;
use crate::engine::systems::hud::{
    fps_text_update_system, marked_count_update_system, spawn_hud, status_text_update_system,
};
// Crate marker and tool modules
use crate::marker::highlight::HighlightCache;
use crate::marker::store::CoordStore;
use crate::settings::{HighlightSettings, settings_hotkey_system};
use crate::tools::feedback::StatusEvent;
use crate::tools::marker_tool::{marker_tool_system, preload_coord_store};
use crate::world::voxel_world::VoxelWorld;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .init_resource::<VoxelWorld>()
        .init_resource::<HighlightCache>()
        .init_resource::<FlyCamera>()
        .insert_resource(CoordStore::at_default_location())
        .insert_resource(HighlightSettings::load_or_default())
        .add_event::<StatusEvent>();

    app.add_systems(Startup, (preload_coord_store, setup, setup_world));

    let runtime_systems = (
        camera_controller,
        marker_tool_system,
        settings_hotkey_system,
        draw_highlight_boxes,
        status_text_update_system,
        marked_count_update_system,
        fps_text_update_system,
    );
    app.add_systems(Update, runtime_systems);

    app
}

fn setup(mut commands: Commands, fly_camera: Res<FlyCamera>) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands, &fly_camera);
    spawn_hud(&mut commands);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
}

fn spawn_camera(commands: &mut Commands, fly_camera: &FlyCamera) {
    let rotation = Quat::from_euler(EulerRot::YXZ, fly_camera.yaw, fly_camera.pitch, 0.0);
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(fly_camera.position).with_rotation(rotation),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(Window {
            title: "Block Marker".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    };

    DefaultPlugins.set(window_config)
}
