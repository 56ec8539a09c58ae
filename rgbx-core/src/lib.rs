//! rgbx-core - Core library for the RGB color explorer.
//!
//! This library provides the logic behind an RGB color picker: parsing of
//! typed channel values, named preset colors, and the auto-sweep animation
//! that bounces channels between 0 and 255. Rendering and timers belong to
//! the front-end; the core only exposes a [`Scheduler`] seam and a
//! [`Explorer::on_timer`] callback.
//!
//! # Example
//!
//! ```
//! use rgbx_core::{Channel, Explorer, ManualScheduler};
//!
//! let mut explorer = Explorer::new(ManualScheduler::new());
//! explorer.apply_entry(Channel::Red, "0xff").unwrap();
//! explorer.set_animation(Channel::Blue, true);
//!
//! while let Some(due) = explorer.scheduler_mut().next_due() {
//!     explorer.on_timer(due.handle);
//!     if explorer.channel(Channel::Blue) == 255 {
//!         explorer.stop_all();
//!     }
//! }
//! assert_eq!(explorer.color().summary(), "RGB(255, 128, 255) | HEX: #FF80FF");
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod explorer;
pub mod model;
pub mod parser;

// Re-exports for convenience
pub use animation::{
    Activation, ChannelSweepAnimator, Direction, DueTimer, ManualScheduler, Scheduler, Speed,
    TimerHandle,
};
pub use error::{ErrorCode, ExplorerError, ParseError, Result};
pub use explorer::Explorer;
pub use model::{Channel, Color, Preset, PresetSelection, PRESETS};
pub use parser::parse_channel_value;
