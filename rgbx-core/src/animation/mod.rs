//! Channel sweep animation and its timer seam.

mod scheduler;
mod sweep;

pub use scheduler::{DueTimer, ManualScheduler, Scheduler, TimerHandle};
pub use sweep::{Activation, ChannelSweepAnimator, Direction, Speed, SweepState};
