//! Configuration constants and settings for the explorer.

use std::time::Duration;

/// Lowest value a color channel can hold.
pub const CHANNEL_MIN: u8 = 0;

/// Highest value a color channel can hold.
pub const CHANNEL_MAX: u8 = 255;

/// Starting value of every channel (middle gray).
pub const DEFAULT_CHANNEL_VALUE: u8 = 128;

/// Slowest sweep speed.
pub const MIN_SPEED: u8 = 1;

/// Fastest sweep speed.
pub const MAX_SPEED: u8 = 10;

/// Speed selected at startup.
pub const DEFAULT_SPEED: u8 = 3;

/// Tick period before the speed adjustment, in milliseconds.
pub const BASE_PERIOD_MS: u64 = 200;

/// Milliseconds removed from the tick period per speed unit.
pub const PERIOD_PER_SPEED_MS: u64 = 15;

/// Shortest tick period, in milliseconds.
pub const MIN_PERIOD_MS: u64 = 20;

/// Dropdown entry that leaves the color untouched.
pub const CUSTOM_COLOR_LABEL: &str = "Custom Color";

/// Timing of the sweep loop for a given speed.
pub mod timing {
    use super::*;

    /// Channel step applied on each tick.
    #[inline]
    pub fn step_for_speed(speed: u8) -> u8 {
        speed
    }

    /// Delay between two ticks: `max(20, 200 - speed * 15)` ms.
    #[inline]
    pub fn period_for_speed(speed: u8) -> Duration {
        let ms = BASE_PERIOD_MS
            .saturating_sub(u64::from(speed) * PERIOD_PER_SPEED_MS)
            .max(MIN_PERIOD_MS);
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::timing::*;
    use super::*;

    #[test]
    fn test_period_shrinks_with_speed() {
        assert_eq!(period_for_speed(1), Duration::from_millis(185));
        assert_eq!(period_for_speed(DEFAULT_SPEED), Duration::from_millis(155));
        assert_eq!(period_for_speed(MAX_SPEED), Duration::from_millis(50));
    }

    #[test]
    fn test_period_floor() {
        // Not reachable through Speed, but the formula must still bottom out.
        assert_eq!(period_for_speed(13), Duration::from_millis(20));
        assert_eq!(period_for_speed(200), Duration::from_millis(20));
    }

    #[test]
    fn test_step_matches_speed() {
        for speed in MIN_SPEED..=MAX_SPEED {
            assert_eq!(step_for_speed(speed), speed);
        }
    }
}
