//! Data model types for the color explorer.

mod channel;
mod color;
mod preset;

pub use channel::Channel;
pub use color::Color;
pub use preset::{
    dropdown_labels, extract_preset_name, find_preset, resolve_selection, Preset,
    PresetSelection, PRESETS,
};
