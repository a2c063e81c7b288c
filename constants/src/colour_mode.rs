use serde::{Deserialize, Serialize};

/// Highlight colour presets, including palettes tuned for common colour-vision deficiencies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColourMode {
    #[default]
    Default,
    Deuteranopia,
    Protanopia,
    Tritanopia,
    HighContrast,
}

impl ColourMode {
    /// Highlight colour as RGB components.
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            ColourMode::Default => [1.0, 0.85, 0.0],
            ColourMode::Deuteranopia => [0.0, 0.55, 1.0],
            ColourMode::Protanopia => [0.0, 0.75, 1.0],
            ColourMode::Tritanopia => [1.0, 0.4, 0.9],
            ColourMode::HighContrast => [1.0, 1.0, 1.0],
        }
    }

    /// Next preset in cycling order.
    pub fn next(&self) -> ColourMode {
        match self {
            ColourMode::Default => ColourMode::Deuteranopia,
            ColourMode::Deuteranopia => ColourMode::Protanopia,
            ColourMode::Protanopia => ColourMode::Tritanopia,
            ColourMode::Tritanopia => ColourMode::HighContrast,
            ColourMode::HighContrast => ColourMode::Default,
        }
    }

    /// Short label for the HUD readout.
    pub fn label(&self) -> &'static str {
        match self {
            ColourMode::Default => "default",
            ColourMode::Deuteranopia => "deuteranopia",
            ColourMode::Protanopia => "protanopia",
            ColourMode::Tritanopia => "tritanopia",
            ColourMode::HighContrast => "high contrast",
        }
    }
}
