use bevy::prelude::*;

use crate::marker::coord::BlockCoord;

/// Visual tone of a status message, mapped to a text colour by the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Removed,
    Warning,
}

/// One-line user feedback shown in the HUD status line.
#[derive(Event, Debug, Clone)]
pub struct StatusEvent {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusEvent {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Info,
        }
    }

    /// Confirmation after a store, with a suffix when more cells were linked in.
    pub fn stored(anchor: BlockCoord, resolved: usize) -> Self {
        Self {
            text: format!("Stored: {}{}", anchor, linked_suffix(resolved)),
            tone: StatusTone::Success,
        }
    }

    /// Confirmation after a removal, with a suffix when more cells were linked in.
    pub fn removed(anchor: BlockCoord, resolved: usize) -> Self {
        Self {
            text: format!("Removed: {}{}", anchor, linked_suffix(resolved)),
            tone: StatusTone::Removed,
        }
    }

    pub fn already_stored(anchor: BlockCoord, resolved: usize) -> Self {
        Self {
            text: format!("Already stored: {}{}", anchor, multi_suffix(resolved)),
            tone: StatusTone::Warning,
        }
    }

    pub fn not_stored(anchor: BlockCoord, resolved: usize) -> Self {
        Self {
            text: format!("Not stored: {}{}", anchor, multi_suffix(resolved)),
            tone: StatusTone::Warning,
        }
    }

    pub fn no_target() -> Self {
        Self {
            text: "No valid block targeted.".to_string(),
            tone: StatusTone::Warning,
        }
    }

    pub fn file_error(action: &str, file_name: &str) -> Self {
        Self {
            text: format!("Failed to {action} {file_name}."),
            tone: StatusTone::Warning,
        }
    }

    pub fn highlight_toggled(enabled: bool) -> Self {
        Self {
            text: format!("Highlight: {}", if enabled { "ON" } else { "OFF" }),
            tone: if enabled {
                StatusTone::Success
            } else {
                StatusTone::Warning
            },
        }
    }
}

fn linked_suffix(resolved: usize) -> String {
    if resolved > 1 {
        format!(" (+{} linked)", resolved - 1)
    } else {
        String::new()
    }
}

fn multi_suffix(resolved: usize) -> &'static str {
    if resolved > 1 { " (multi-block)" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_messages_count_the_linked_cells() {
        let anchor = BlockCoord::new(1, 2, 3);
        assert_eq!(StatusEvent::stored(anchor, 1).text, "Stored: (1, 2, 3)");
        assert_eq!(
            StatusEvent::stored(anchor, 2).text,
            "Stored: (1, 2, 3) (+1 linked)"
        );
        assert_eq!(
            StatusEvent::removed(anchor, 3).text,
            "Removed: (1, 2, 3) (+2 linked)"
        );
    }

    #[test]
    fn no_op_messages_flag_multi_block_structures() {
        let anchor = BlockCoord::new(0, 0, 0);
        assert_eq!(
            StatusEvent::already_stored(anchor, 1).text,
            "Already stored: (0, 0, 0)"
        );
        assert_eq!(
            StatusEvent::already_stored(anchor, 2).text,
            "Already stored: (0, 0, 0) (multi-block)"
        );
        assert_eq!(
            StatusEvent::not_stored(anchor, 2).text,
            "Not stored: (0, 0, 0) (multi-block)"
        );
    }

    #[test]
    fn file_errors_name_the_action_and_file() {
        let event = StatusEvent::file_error("save", "coords.json");
        assert_eq!(event.text, "Failed to save coords.json.");
        assert_eq!(event.tone, StatusTone::Warning);
    }

    #[test]
    fn toggle_message_tone_follows_the_state() {
        assert_eq!(StatusEvent::highlight_toggled(true).text, "Highlight: ON");
        assert_eq!(
            StatusEvent::highlight_toggled(true).tone,
            StatusTone::Success
        );
        assert_eq!(StatusEvent::highlight_toggled(false).text, "Highlight: OFF");
        assert_eq!(
            StatusEvent::highlight_toggled(false).tone,
            StatusTone::Warning
        );
    }
}
