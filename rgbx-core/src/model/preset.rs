//! Named preset colors offered in the "common colors" list.

use super::Color;
use crate::config::CUSTOM_COLOR_LABEL;
use crate::error::{ExplorerError, Result};

/// A named color with fixed RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub color: Color,
}

impl Preset {
    const fn new(name: &'static str, red: u8, green: u8, blue: u8) -> Self {
        Self {
            name,
            color: Color::new(red, green, blue),
        }
    }

    /// Dropdown label, e.g. `Orange (#FFA500)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.color.hex_upper())
    }
}

/// Common colors in dropdown order.
pub static PRESETS: &[Preset] = &[
    Preset::new("Black", 0, 0, 0),
    Preset::new("White", 255, 255, 255),
    Preset::new("Red", 255, 0, 0),
    Preset::new("Green", 0, 128, 0),
    Preset::new("Blue", 0, 0, 255),
    Preset::new("Yellow", 255, 255, 0),
    Preset::new("Cyan", 0, 255, 255),
    Preset::new("Magenta", 255, 0, 255),
    Preset::new("Silver", 192, 192, 192),
    Preset::new("Gray", 128, 128, 128),
    Preset::new("Maroon", 128, 0, 0),
    Preset::new("Olive", 128, 128, 0),
    Preset::new("Lime", 0, 255, 0),
    Preset::new("Aqua", 0, 255, 255),
    Preset::new("Teal", 0, 128, 128),
    Preset::new("Navy", 0, 0, 128),
    Preset::new("Fuchsia", 255, 0, 255),
    Preset::new("Purple", 128, 0, 128),
    Preset::new("Orange", 255, 165, 0),
    Preset::new("Pink", 255, 192, 203),
    Preset::new("Brown", 165, 42, 42),
    Preset::new("Coral", 255, 127, 80),
    Preset::new("Crimson", 220, 20, 60),
    Preset::new("Gold", 255, 215, 0),
    Preset::new("Indigo", 75, 0, 130),
    Preset::new("Ivory", 255, 255, 240),
    Preset::new("Khaki", 240, 230, 140),
    Preset::new("Lavender", 230, 230, 250),
    Preset::new("Lemon", 255, 250, 205),
    Preset::new("Mint", 245, 255, 250),
    Preset::new("Peach", 255, 218, 185),
    Preset::new("Plum", 221, 160, 221),
    Preset::new("Salmon", 250, 128, 114),
    Preset::new("Tan", 210, 180, 140),
    Preset::new("Turquoise", 64, 224, 208),
    Preset::new("Violet", 238, 130, 238),
    Preset::new("Wheat", 245, 222, 179),
];

/// What a dropdown label resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetSelection {
    /// "Custom Color": leave the channels alone.
    Custom,
    Named(&'static Preset),
}

impl PresetSelection {
    /// Name shown in the dropdown for this selection.
    pub fn name(&self) -> &'static str {
        match self {
            PresetSelection::Custom => CUSTOM_COLOR_LABEL,
            PresetSelection::Named(preset) => preset.name,
        }
    }
}

/// Find a preset by name, ignoring case.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Strip the ` (#RRGGBB)` suffix from a dropdown label.
pub fn extract_preset_name(label: &str) -> &str {
    label.split_once(" (").map_or(label, |(name, _)| name)
}

/// Resolve a dropdown label or bare preset name.
pub fn resolve_selection(label: &str) -> Result<PresetSelection> {
    let name = extract_preset_name(label.trim());
    if name.eq_ignore_ascii_case(CUSTOM_COLOR_LABEL) {
        return Ok(PresetSelection::Custom);
    }
    find_preset(name)
        .map(PresetSelection::Named)
        .ok_or_else(|| ExplorerError::UnknownPreset {
            name: name.to_string(),
        })
}

/// All dropdown labels: "Custom Color" first, then every preset.
pub fn dropdown_labels() -> Vec<String> {
    std::iter::once(CUSTOM_COLOR_LABEL.to_string())
        .chain(PRESETS.iter().map(Preset::label))
        .collect()
}
