/// Directory under the platform config dir that holds all persisted files.
pub const APP_CONFIG_DIR: &str = "block-marker";

/// File holding the marked coordinate set.
pub const COORDS_FILE_NAME: &str = "coords.json";

/// File holding the user settings.
pub const SETTINGS_FILE_NAME: &str = "settings.json";
