use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use crate::tools::feedback::StatusEvent;
use constants::colour_mode::ColourMode;
use constants::render_settings::{
    DEFAULT_HIGHLIGHT_ALPHA, DEFAULT_RENDER_DISTANCE, MAX_HIGHLIGHT_ALPHA, MAX_RENDER_DISTANCE,
    MIN_HIGHLIGHT_ALPHA, MIN_RENDER_DISTANCE, RENDER_DISTANCE_STEP,
};

/// User-adjustable highlight settings, persisted across sessions.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HighlightSettings {
    pub render_distance: u32,
    pub colour_mode: ColourMode,
    pub alpha: f32,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            render_distance: DEFAULT_RENDER_DISTANCE,
            colour_mode: ColourMode::default(),
            alpha: DEFAULT_HIGHLIGHT_ALPHA,
        }
    }
}

impl HighlightSettings {
    /// Values forced back into their documented ranges.
    pub fn sanitized(mut self) -> Self {
        self.render_distance = self
            .render_distance
            .clamp(MIN_RENDER_DISTANCE, MAX_RENDER_DISTANCE);
        self.alpha = self.alpha.clamp(MIN_HIGHLIGHT_ALPHA, MAX_HIGHLIGHT_ALPHA);
        self
    }

    /// Active highlight colour with the configured opacity applied.
    pub fn colour(&self) -> Color {
        let [r, g, b] = self.colour_mode.rgb();
        Color::srgba(r, g, b, self.alpha)
    }

    /// Settings as loaded at startup, falling back to defaults.
    pub fn load_or_default() -> Self {
        load_settings(&settings_path()).unwrap_or_default()
    }
}

/// Default settings file location under the platform config directory.
pub fn settings_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(constants::storage::APP_CONFIG_DIR)
        .join(constants::storage::SETTINGS_FILE_NAME)
}

/// Reads settings leniently; missing or unreadable files yield `None`.
pub fn load_settings(path: &Path) -> Option<HighlightSettings> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            if error.kind() != io::ErrorKind::NotFound {
                warn!("Failed to read settings {}: {}", path.display(), error);
            }
            return None;
        }
    };
    match serde_json::from_str::<HighlightSettings>(&raw) {
        Ok(settings) => Some(settings.sanitized()),
        Err(error) => {
            warn!(
                "Failed to parse settings {}: {} (ignoring file)",
                path.display(),
                error
            );
            None
        }
    }
}

pub fn save_settings(path: &Path, settings: &HighlightSettings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = serde_json::to_vec_pretty(settings)?;
    std::fs::write(path, bytes)
}

/// Keyboard adjustments: C cycles the colour mode, [ and ] step the render
/// distance. Changes persist immediately.
pub fn settings_hotkey_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<HighlightSettings>,
    mut status: EventWriter<StatusEvent>,
) {
    let mut changed = false;

    if keyboard.just_pressed(KeyCode::KeyC) {
        settings.colour_mode = settings.colour_mode.next();
        status.send(StatusEvent::info(format!(
            "Highlight colour: {}",
            settings.colour_mode.label()
        )));
        changed = true;
    }
    if keyboard.just_pressed(KeyCode::BracketLeft) {
        settings.render_distance = settings
            .render_distance
            .saturating_sub(RENDER_DISTANCE_STEP)
            .max(MIN_RENDER_DISTANCE);
        status.send(StatusEvent::info(format!(
            "Render distance: {}",
            settings.render_distance
        )));
        changed = true;
    }
    if keyboard.just_pressed(KeyCode::BracketRight) {
        settings.render_distance =
            (settings.render_distance + RENDER_DISTANCE_STEP).min(MAX_RENDER_DISTANCE);
        status.send(StatusEvent::info(format!(
            "Render distance: {}",
            settings.render_distance
        )));
        changed = true;
    }

    if changed {
        let path = settings_path();
        if let Err(error) = save_settings(&path, &settings) {
            warn!("Failed to write settings {}: {}", path.display(), error);
            status.send(StatusEvent::file_error(
                "save",
                constants::storage::SETTINGS_FILE_NAME,
            ));
        }
    }
}
