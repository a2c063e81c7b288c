//! Interactive marking tools and their user feedback.
//!
//! One tool drives the whole mutation flow: a key press resolves the targeted
//! cell to its structure, mutates the store as a batch and forwards the
//! resulting delta to the highlight cache. Every outcome is reported through a
//! [`feedback::StatusEvent`].

/// Status messages consumed by the HUD, with the tone of each outcome.
pub mod feedback;

/// Keyboard-driven store / remove / highlight-toggle tool.
pub mod marker_tool;
