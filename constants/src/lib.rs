pub mod colour_mode;
pub mod interaction;
pub mod render_settings;
pub mod storage;
