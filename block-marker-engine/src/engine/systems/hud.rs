use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::marker::highlight::HighlightCache;
use crate::marker::store::CoordStore;
use crate::tools::feedback::{StatusEvent, StatusTone};

/// Seconds a status message stays on screen.
const STATUS_LINGER_SECONDS: f32 = 4.0;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct MarkedCountText;

/// Status line with the remaining display time of the current message.
#[derive(Component, Default)]
pub struct StatusText {
    remaining: f32,
}

/// Spawns the full-screen overlay: crosshair, status line, counters and help.
pub fn spawn_hud(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            // Crosshair sits in the flex centre; everything else is absolute.
            parent.spawn((
                Text::new("+"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(64.0),
                    ..default()
                },
                StatusText::default(),
            ));

            parent.spawn((
                Text::new("Marked: 0 | Highlight: OFF"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                MarkedCountText,
            ));

            parent.spawn((
                Text::new(
                    "Up/Down mark/unmark | H highlight | C colour | [ ] distance | RMB+WASD fly",
                ),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 0.6)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

/// Shows the most recent status message and fades it out after a few seconds.
pub fn status_text_update_system(
    mut events: EventReader<StatusEvent>,
    mut query: Query<(&mut Text, &mut TextColor, &mut StatusText)>,
    time: Res<Time>,
) {
    let Ok((mut text, mut colour, mut status)) = query.single_mut() else {
        return;
    };

    if let Some(event) = events.read().last() {
        text.0 = event.text.clone();
        colour.0 = tone_colour(event.tone);
        status.remaining = STATUS_LINGER_SECONDS;
        return;
    }

    if status.remaining > 0.0 {
        status.remaining -= time.delta_secs();
        if status.remaining <= 0.0 {
            text.0.clear();
        }
    }
}

/// Keeps the marked-count line in step with the store and cache.
pub fn marked_count_update_system(
    store: Res<CoordStore>,
    cache: Res<HighlightCache>,
    mut query: Query<&mut Text, With<MarkedCountText>>,
) {
    let Ok(mut text) = query.single_mut() else {
        return;
    };
    let highlight = if cache.is_enabled() { "ON" } else { "OFF" };
    text.0 = format!("Marked: {} | Highlight: {}", store.len(), highlight);
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

fn tone_colour(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Info => Color::WHITE,
        StatusTone::Success => Color::srgb(0.35, 0.9, 0.35),
        StatusTone::Removed => Color::srgb(0.95, 0.72, 0.2),
        StatusTone::Warning => Color::srgb(0.95, 0.33, 0.28),
    }
}
