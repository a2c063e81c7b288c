//! Core application setup and lifecycle.
//!
//! Handles window configuration, plugin initialisation, resource registration,
//! and the startup sequence that assembles the scene.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the demo world, marker resources, input systems,
/// and the HUD overlay.
pub mod app_setup;
