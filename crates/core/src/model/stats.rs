use thiserror::Error;

use crate::model::reward::RewardPoints;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatsError {
    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

//
// ─── COUNTERS ─────────────────────────────────────────────────────────────────
//

/// Upper bound for the percentage counters.
pub const PERCENT_MAX: u32 = 100;

const STABILITY_GAIN: u32 = 5;
const RESILIENCE_GAIN: u32 = 3;
const POINTS_PER_LEVEL: u32 = 100;

/// Cumulative counters for the page lifetime.
///
/// Only [`StatsCounters::apply_reward`] produces new values after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatsCounters {
    total_points: u32,
    hedges_used: u32,
    emotional_stability: u32,
    resilience: u32,
}

impl StatsCounters {
    /// # Errors
    ///
    /// Returns `StatsError::OutOfRange` if either percentage exceeds 100.
    pub fn new(
        total_points: u32,
        hedges_used: u32,
        emotional_stability: u32,
        resilience: u32,
    ) -> Result<Self, StatsError> {
        check_percent("emotional_stability", emotional_stability)?;
        check_percent("resilience", resilience)?;
        Ok(Self {
            total_points,
            hedges_used,
            emotional_stability,
            resilience,
        })
    }

    /// The counters a fresh page starts with.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            total_points: 245,
            hedges_used: 12,
            emotional_stability: 75,
            resilience: 68,
        }
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    #[must_use]
    pub fn hedges_used(&self) -> u32 {
        self.hedges_used
    }

    #[must_use]
    pub fn emotional_stability(&self) -> u32 {
        self.emotional_stability
    }

    #[must_use]
    pub fn resilience(&self) -> u32 {
        self.resilience
    }

    /// Folds one collected reward into the counters.
    ///
    /// Percentages saturate at 100.
    #[must_use]
    pub fn apply_reward(self, reward: RewardPoints) -> Self {
        Self {
            total_points: self.total_points.saturating_add(reward.value()),
            hedges_used: self.hedges_used.saturating_add(1),
            emotional_stability: (self.emotional_stability + STABILITY_GAIN).min(PERCENT_MAX),
            resilience: (self.resilience + RESILIENCE_GAIN).min(PERCENT_MAX),
        }
    }

    /// Derived display values. Pure: equal counters give equal views.
    #[must_use]
    pub fn derive_view(&self) -> StatsView {
        StatsView {
            level: self.total_points / POINTS_PER_LEVEL + 1,
            level_progress: self.total_points % POINTS_PER_LEVEL,
            advisory: Advisory::for_resilience(self.resilience),
        }
    }
}

impl Default for StatsCounters {
    fn default() -> Self {
        Self::initial()
    }
}

fn check_percent(field: &'static str, value: u32) -> Result<(), StatsError> {
    if value > PERCENT_MAX {
        return Err(StatsError::OutOfRange {
            field,
            value,
            max: PERCENT_MAX,
        });
    }
    Ok(())
}

//
// ─── DERIVED VIEW ─────────────────────────────────────────────────────────────
//

/// Today's advice, tiered by resilience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Resilience at or above 80.
    Strong,
    /// Resilience at or above 60.
    Moderate,
    Low,
}

impl Advisory {
    #[must_use]
    pub fn for_resilience(resilience: u32) -> Self {
        if resilience >= 80 {
            Advisory::Strong
        } else if resilience >= 60 {
            Advisory::Moderate
        } else {
            Advisory::Low
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Advisory::Strong => "你的韧性很强！继续保持！",
            Advisory::Moderate => "适当休息，补充正能量。",
            Advisory::Low => "建议多使用情感支持类对冲机制。",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsView {
    pub level: u32,
    /// Points into the current level, `0..100`.
    pub level_progress: u32,
    pub advisory: Advisory,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
