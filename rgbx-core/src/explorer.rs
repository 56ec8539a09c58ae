//! The explorer controller: single owner of the color being edited.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::animation::{Activation, ChannelSweepAnimator, Scheduler, Speed, TimerHandle};
use crate::error::{ParseError, Result};
use crate::model::{resolve_selection, Channel, Color, PresetSelection};
use crate::parser::parse_channel_value;

/// Color state plus the sweep loop, driven by user input and timer callbacks.
///
/// All mutation goes through `&mut self`, so a timer callback can never
/// interleave with an edit.
#[derive(Debug)]
pub struct Explorer<S: Scheduler> {
    color: Color,
    animator: ChannelSweepAnimator,
    selection: PresetSelection,
    scheduler: S,
    /// The only timer handle `on_timer` will honour.
    pending: Option<TimerHandle>,
}

impl<S: Scheduler> Explorer<S> {
    /// Create an explorer showing middle gray with no channel sweeping.
    pub fn new(scheduler: S) -> Self {
        Self {
            color: Color::gray(),
            animator: ChannelSweepAnimator::default(),
            selection: PresetSelection::Custom,
            scheduler,
            pending: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        self.color.get(channel)
    }

    pub fn animator(&self) -> &ChannelSweepAnimator {
        &self.animator
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Currently selected dropdown entry.
    pub fn selection(&self) -> PresetSelection {
        self.selection
    }

    /// Handle of the tick currently armed, if any.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Manual slider change.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        self.color.set(channel, value);
        self.selection = PresetSelection::Custom;
    }

    /// Manual text entry. The color is left untouched when the text is rejected.
    pub fn apply_entry(
        &mut self,
        channel: Channel,
        text: &str,
    ) -> std::result::Result<u8, ParseError> {
        let value = parse_channel_value(text)?;
        self.set_channel(channel, value);
        Ok(value)
    }

    /// Apply a dropdown entry. "Custom Color" leaves everything as is and
    /// returns `None`.
    pub fn select_preset(&mut self, label: &str) -> Result<Option<Color>> {
        let selection = resolve_selection(label)?;
        self.selection = selection;
        match selection {
            PresetSelection::Custom => Ok(None),
            PresetSelection::Named(preset) => {
                debug!("Selected preset {}", preset.label());
                self.color = preset.color;
                Ok(Some(preset.color))
            }
        }
    }

    /// Back to 128/128/128.
    pub fn reset_to_gray(&mut self) {
        self.color = Color::gray();
    }

    /// Replace the color with a random one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Color {
        self.color = Color::random(rng);
        self.color
    }

    /// Text handed to the clipboard.
    pub fn clipboard_text(&self) -> String {
        self.color.css_rgb()
    }

    pub fn is_active(&self) -> bool {
        self.animator.is_active()
    }

    /// Toggle the sweep of a single channel.
    pub fn set_animation(&mut self, channel: Channel, enabled: bool) {
        let activation = self.animator.set_enabled(channel, enabled);
        self.apply_activation(activation);
    }

    /// Sweep every channel.
    pub fn start_all(&mut self) {
        let activation = self.animator.enable_all();
        self.apply_activation(activation);
    }

    /// Stop every channel and cancel the pending tick.
    pub fn stop_all(&mut self) {
        let activation = self.animator.disable_all();
        self.apply_activation(activation);
    }

    /// Takes effect from the next tick; the armed timer keeps its delay.
    pub fn set_speed(&mut self, speed: Speed) {
        self.animator.set_speed(speed);
    }

    /// Timer callback. Returns whether a tick ran.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.pending != Some(handle) {
            warn!("Ignoring stale sweep timer {}", handle.id());
            return false;
        }
        self.pending = None;
        self.run_frame()
    }

    /// Stop animating before the owner goes away.
    pub fn shutdown(&mut self) {
        self.stop_all();
        self.cancel_pending();
    }

    fn apply_activation(&mut self, activation: Activation) {
        match activation {
            Activation::Started => {
                info!("Sweep started at speed {}", self.animator.speed().get());
                self.run_frame();
            }
            Activation::Stopped => {
                info!("Sweep stopped at {}", self.color.hex_upper());
                self.cancel_pending();
            }
            Activation::Unchanged => {}
        }
    }

    /// One tick, then re-arm while still active.
    fn run_frame(&mut self) -> bool {
        if !self.animator.tick(&mut self.color) {
            return false;
        }
        self.cancel_pending();
        self.pending = Some(self.scheduler.schedule(self.animator.period()));
        true
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}
