use std::time::Duration;

use thiserror::Error;

use crate::model::PROGRESS_MAX;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    #[error("tick interval must be > 0")]
    ZeroInterval,

    #[error("tick step must be between 1 and 100, got {0}")]
    InvalidStep(u8),
}

/// Pace of the simulated progress animation.
///
/// The animation carries no meaning beyond perceived latency; the schedule is
/// only how often a running session advances and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
    step: u8,
}

impl TickSchedule {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);
    pub const DEFAULT_STEP: u8 = 2;

    /// # Errors
    ///
    /// Returns `ScheduleError::ZeroInterval` for a zero interval and
    /// `ScheduleError::InvalidStep` when `step` is outside `1..=100`.
    pub fn new(interval: Duration, step: u8) -> Result<Self, ScheduleError> {
        if interval.is_zero() {
            return Err(ScheduleError::ZeroInterval);
        }
        if step == 0 || step > PROGRESS_MAX {
            return Err(ScheduleError::InvalidStep(step));
        }
        Ok(Self { interval, step })
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Number of ticks a session needs to go from 0 to 100.
    #[must_use]
    pub fn ticks_to_complete(&self) -> u32 {
        u32::from(PROGRESS_MAX).div_ceil(u32::from(self.step))
    }

    /// Wall-clock time from open to completion.
    #[must_use]
    pub fn time_to_complete(&self) -> Duration {
        self.interval * self.ticks_to_complete()
    }
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            step: Self::DEFAULT_STEP,
        }
    }
}
