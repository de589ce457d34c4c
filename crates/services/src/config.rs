//! Startup configuration, read from an optional TOML file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use hedge_core::TickSchedule;
use hedge_core::model::{Category, RewardPoints, StatsCounters};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HedgeConfig {
    pub ticker: TickerConfig,
    pub stats: StatsConfig,
    pub reward: RewardConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TickerConfig {
    pub interval_ms: u64,
    pub step: u8,
}

impl Default for TickerConfig {
    fn default() -> Self {
        let schedule = TickSchedule::default();
        Self {
            interval_ms: u64::try_from(schedule.interval().as_millis()).unwrap_or(u64::MAX),
            step: schedule.step(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    pub total_points: u32,
    pub hedges_used: u32,
    pub emotional_stability: u32,
    pub resilience: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        let initial = StatsCounters::initial();
        Self {
            total_points: initial.total_points(),
            hedges_used: initial.hedges_used(),
            emotional_stability: initial.emotional_stability(),
            resilience: initial.resilience(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewardConfig {
    /// Grant this amount on every collect instead of a random draw.
    pub fixed: Option<u32>,
}

/// Defaults for the headless runner; CLI flags win.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub category: Category,
    pub sessions: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            category: Category::Emotional,
            sessions: 1,
        }
    }
}

impl HedgeConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if it is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for a zero interval or a step outside `1..=100`.
    pub fn schedule(&self) -> Result<TickSchedule, ConfigError> {
        TickSchedule::new(
            Duration::from_millis(self.ticker.interval_ms),
            self.ticker.step,
        )
        .map_err(|err| ConfigError::Invalid(err.into()))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a percentage exceeds 100.
    pub fn initial_counters(&self) -> Result<StatsCounters, ConfigError> {
        let stats = &self.stats;
        StatsCounters::new(
            stats.total_points,
            stats.hedges_used,
            stats.emotional_stability,
            stats.resilience,
        )
        .map_err(|err| ConfigError::Invalid(err.into()))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the fixed reward is outside `10..=59`.
    pub fn fixed_reward(&self) -> Result<Option<RewardPoints>, ConfigError> {
        self.reward
            .fixed
            .map(RewardPoints::new)
            .transpose()
            .map_err(|err| ConfigError::Invalid(err.into()))
    }

    /// Checks every section at once.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::Invalid` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.schedule()?;
        self.initial_counters()?;
        self.fixed_reward()?;
        Ok(())
    }
}
