//! Text and JSON rendering of colors and sweep frames.

use anyhow::Result;
use serde::Serialize;

use rgbx_core::{Channel, Color, Explorer, ManualScheduler};

/// Everything a GUI would display for one color.
#[derive(Debug, Serialize)]
pub struct ColorReport<'a> {
    pub preset: &'a str,
    #[serde(flatten)]
    pub color: Color,
    pub hex: String,
    pub summary: String,
    pub clipboard: String,
}

impl<'a> ColorReport<'a> {
    pub fn new(color: &Color, preset: &'a str) -> Self {
        Self {
            preset,
            color: *color,
            hex: color.hex_upper(),
            summary: color.summary(),
            clipboard: color.css_rgb(),
        }
    }

    fn text(&self) -> String {
        let mut lines = vec![self.summary.clone(), format!("Preset: {}", self.preset)];
        for channel in Channel::ALL {
            lines.push(format!(
                "{:<6} {:>3}  {}",
                channel.title(),
                self.color.get(channel),
                self.color.channel_label(channel)
            ));
        }
        lines.push(format!("Copy: {}", self.clipboard));
        lines.join("\n")
    }
}

/// One sweep frame.
#[derive(Debug, Serialize)]
pub struct Frame {
    pub frame: u64,
    /// Virtual time since the sweep started.
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub color: Color,
    pub hex: String,
}

impl Frame {
    pub fn new(frame: u64, explorer: &Explorer<ManualScheduler>) -> Self {
        let color = explorer.color();
        Self {
            frame,
            elapsed_ms: explorer.scheduler().now().as_millis() as u64,
            color,
            hex: color.hex_upper(),
        }
    }

    fn line(&self) -> String {
        format!(
            "{:>4} {:>6}ms  {}  R={} G={} B={}",
            self.frame,
            self.elapsed_ms,
            self.color.summary(),
            self.color.channel_label(Channel::Red),
            self.color.channel_label(Channel::Green),
            self.color.channel_label(Channel::Blue),
        )
    }
}

/// Print a color as a label block or as pretty JSON.
pub fn print_color(color: &Color, preset: &str, json: bool) -> Result<()> {
    let report = ColorReport::new(color, preset);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.text());
    }
    Ok(())
}

/// Print a sweep frame as a text line or a JSON line.
pub fn print_frame(frame: &Frame, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(frame)?);
    } else {
        println!("{}", frame.line());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_json_shape() {
        let report = ColorReport::new(&Color::new(255, 165, 0), "Orange");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "preset": "Orange",
                "red": 255,
                "green": 165,
                "blue": 0,
                "hex": "#FFA500",
                "summary": "RGB(255, 165, 0) | HEX: #FFA500",
                "clipboard": "rgb(255, 165, 0)",
            })
        );
    }

    #[test]
    fn test_report_text() {
        let report = ColorReport::new(&Color::new(255, 165, 0), "Orange");
        insta::assert_snapshot!(report.text(), @r###"
        RGB(255, 165, 0) | HEX: #FFA500
        Preset: Orange
        Red    255  0xFF
        Green  165  0xA5
        Blue     0  0x00
        Copy: rgb(255, 165, 0)
        "###);
    }

    #[test]
    fn test_frame_line() {
        let mut explorer = Explorer::new(ManualScheduler::new());
        explorer.set_animation(Channel::Red, true);
        let frame = Frame::new(1, &explorer);
        assert_eq!(frame.elapsed_ms, 0);
        assert_eq!(
            frame.line(),
            "   1      0ms  RGB(131, 128, 128) | HEX: #838080  R=0x83 G=0x80 B=0x80"
        );
    }
}
