//! Text entry parsers.

mod channel_value;

pub use channel_value::parse_channel_value;
