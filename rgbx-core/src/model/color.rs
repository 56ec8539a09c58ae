//! The color being explored and its derived labels.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Channel;
use crate::config::DEFAULT_CHANNEL_VALUE;

/// An RGB color with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::gray()
    }
}

impl Color {
    /// Create a color from its three channel values.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Middle gray, the startup color.
    pub const fn gray() -> Self {
        Self::new(
            DEFAULT_CHANNEL_VALUE,
            DEFAULT_CHANNEL_VALUE,
            DEFAULT_CHANNEL_VALUE,
        )
    }

    /// A uniformly random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Get a channel value.
    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Set a channel value.
    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    /// Channel values as an `[r, g, b]` triple.
    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Lowercase `#rrggbb`, the form handed to the swatch.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Uppercase `#RRGGBB`, the form shown in labels.
    pub fn hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Per-channel value label, e.g. `0x80`.
    pub fn channel_label(&self, channel: Channel) -> String {
        format!("0x{:02X}", self.get(channel))
    }

    /// `RGB(r, g, b) | HEX: #RRGGBB`
    pub fn summary(&self) -> String {
        format!(
            "RGB({}, {}, {}) | HEX: {}",
            self.red,
            self.green,
            self.blue,
            self.hex_upper()
        )
    }

    /// `rgb(r, g, b)`, the text copied to the clipboard.
    pub fn css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex_upper())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_gray() {
        let color = Color::default();
        assert_eq!(color.to_array(), [128, 128, 128]);
        assert_eq!(color.channel_label(Channel::Red), "0x80");
        assert_eq!(Color::from([1, 2, 3]), Color::new(1, 2, 3));
    }

    #[test]
    fn test_hex_forms() {
        let color = Color::new(255, 165, 0);
        assert_eq!(color.hex(), "#ffa500");
        assert_eq!(color.hex_upper(), "#FFA500");
        assert_eq!(color.to_string(), "#FFA500");
    }

    #[test]
    fn test_hex_is_zero_padded() {
        let color = Color::new(0, 10, 1);
        assert_eq!(color.hex(), "#000a01");
        assert_eq!(color.channel_label(Channel::Green), "0x0A");
    }

    #[test]
    fn test_summary_and_css() {
        let color = Color::new(220, 20, 60);
        assert_eq!(color.summary(), "RGB(220, 20, 60) | HEX: #DC143C");
        assert_eq!(color.css_rgb(), "rgb(220, 20, 60)");
    }

    #[test]
    fn test_set_touches_one_channel() {
        let mut color = Color::gray();
        color.set(Channel::Green, 7);
        assert_eq!(color.get(Channel::Red), 128);
        assert_eq!(color.get(Channel::Green), 7);
        assert_eq!(color.get(Channel::Blue), 128);
    }

    #[test]
    fn test_serializes_as_named_channels() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"red":1,"green":2,"blue":3}"#);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(1, 2, 3));
        assert!(serde_json::from_str::<Color>(r#"{"red":256,"green":0,"blue":0}"#).is_err());
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let a = Color::random(&mut StdRng::seed_from_u64(7));
        let b = Color::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
