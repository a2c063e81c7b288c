//! Runtime systems for highlight rendering and on-screen diagnostics.
//!
//! Draws marked-block outlines each frame and keeps the HUD overlay
//! (status line, marked count, FPS) current.

/// Wireframe box rendering for highlighted blocks within render distance.
pub mod highlight_render;

/// HUD overlay spawning and per-frame text update systems.
///
/// Crosshair, status feedback line, marked-block counter, and FPS readout.
pub mod hud;
