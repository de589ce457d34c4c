use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewardError {
    #[error("reward {0} is outside {min}..={max}", min = RewardPoints::MIN, max = RewardPoints::MAX)]
    OutOfRange(u32),
}

/// Healing points granted when a completed session is collected.
///
/// Always within `MIN..=MAX`; the only ways to build one go through a range
/// check, so any random source must land inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RewardPoints(u32);

impl RewardPoints {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 59;
    /// Number of distinct reward values.
    pub const SPREAD: u32 = Self::MAX - Self::MIN + 1;

    /// # Errors
    ///
    /// Returns `RewardError::OutOfRange` if `value` is not in `MIN..=MAX`.
    pub fn new(value: u32) -> Result<Self, RewardError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RewardError::OutOfRange(value))
        }
    }

    /// Builds a reward from a uniform draw in `0..SPREAD`.
    ///
    /// Offsets past the range saturate at `MAX`, so the result never leaves
    /// `MIN..=MAX` whatever the random source does.
    #[must_use]
    pub fn from_offset(offset: u32) -> Self {
        Self(Self::MIN + offset.min(Self::SPREAD - 1))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}
