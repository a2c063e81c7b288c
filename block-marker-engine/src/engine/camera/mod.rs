//! Free-flight camera for scene navigation.
//!
//! Provides mouse-look and keyboard movement with smooth interpolation,
//! matching the first-person viewpoint the marker tool raycasts from.

/// Fly camera resource and controller system for scene navigation.
pub mod fly_camera;
