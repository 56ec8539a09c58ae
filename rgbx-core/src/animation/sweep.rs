//! Bounded back-and-forth sweep of channel values.

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::{timing, CHANNEL_MAX, CHANNEL_MIN, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use crate::error::{ExplorerError, Result};
use crate::model::{Channel, Color};

/// Sweep speed between 1 (slow) and 10 (fast).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u8);

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl Speed {
    /// Create a speed, rejecting values outside 1-10.
    pub fn new(speed: u8) -> Result<Self> {
        if (MIN_SPEED..=MAX_SPEED).contains(&speed) {
            Ok(Self(speed))
        } else {
            Err(ExplorerError::InvalidSpeed {
                speed,
                min: MIN_SPEED,
                max: MAX_SPEED,
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Channel change per tick.
    pub fn step(self) -> u8 {
        timing::step_for_speed(self.0)
    }

    /// Delay between ticks.
    pub fn period(self) -> Duration {
        timing::period_for_speed(self.0)
    }
}

/// Direction a channel is currently moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// +1 or -1.
    pub fn signum(self) -> i16 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// Per-channel sweep state. The value itself lives in the [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepState {
    pub enabled: bool,
    pub direction: Direction,
}

/// Whether a toggle changed the animator's overall activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// First channel enabled: the tick loop must be armed.
    Started,
    /// Last channel disabled: the pending tick must be cancelled.
    Stopped,
    Unchanged,
}

/// Advances enabled channels on every tick, reflecting at 0 and 255.
#[derive(Debug, Clone, Default)]
pub struct ChannelSweepAnimator {
    states: [SweepState; 3],
    speed: Speed,
}

impl ChannelSweepAnimator {
    pub fn new(speed: Speed) -> Self {
        Self {
            speed,
            ..Default::default()
        }
    }

    /// True iff at least one channel is enabled.
    pub fn is_active(&self) -> bool {
        self.states.iter().any(|s| s.enabled)
    }

    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.states[channel.index()].enabled
    }

    pub fn state(&self, channel: Channel) -> SweepState {
        self.states[channel.index()]
    }

    /// Override a channel's direction.
    pub fn set_direction(&mut self, channel: Channel, direction: Direction) {
        self.states[channel.index()].direction = direction;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Delay until the next tick at the current speed.
    pub fn period(&self) -> Duration {
        self.speed.period()
    }

    /// Enable or disable one channel. Direction is kept so a re-enabled
    /// channel resumes where it stopped.
    pub fn set_enabled(&mut self, channel: Channel, enabled: bool) -> Activation {
        let was_active = self.is_active();
        self.states[channel.index()].enabled = enabled;
        debug!("Sweep {} {}", channel, if enabled { "on" } else { "off" });
        self.activation_since(was_active)
    }

    /// Enable every channel.
    pub fn enable_all(&mut self) -> Activation {
        self.set_all(true)
    }

    /// Disable every channel.
    pub fn disable_all(&mut self) -> Activation {
        self.set_all(false)
    }

    fn set_all(&mut self, enabled: bool) -> Activation {
        let was_active = self.is_active();
        for state in &mut self.states {
            state.enabled = enabled;
        }
        self.activation_since(was_active)
    }

    fn activation_since(&self, was_active: bool) -> Activation {
        match (was_active, self.is_active()) {
            (false, true) => Activation::Started,
            (true, false) => Activation::Stopped,
            _ => Activation::Unchanged,
        }
    }

    /// Advance every enabled channel by one step. Does nothing and returns
    /// `false` while inactive.
    pub fn tick(&mut self, color: &mut Color) -> bool {
        if !self.is_active() {
            return false;
        }

        let step = i16::from(self.speed.step());
        for channel in Channel::ALL {
            let state = &mut self.states[channel.index()];
            if !state.enabled {
                continue;
            }

            let next = i16::from(color.get(channel)) + step * state.direction.signum();
            let next = if next >= i16::from(CHANNEL_MAX) {
                state.direction = Direction::Down;
                CHANNEL_MAX
            } else if next <= i16::from(CHANNEL_MIN) {
                state.direction = Direction::Up;
                CHANNEL_MIN
            } else {
                // Strictly inside (0, 255) here.
                next as u8
            };

            color.set(channel, next);
        }

        trace!("Sweep tick -> {}", color.hex_upper());
        true
    }
}
