use std::sync::Arc;

use hedge_core::TickSchedule;
use hedge_core::model::StatsCounters;

use crate::config::HedgeConfig;
use crate::error::AppServicesError;
use crate::rewards::{FixedReward, RandomReward, RewardSource};
use crate::shell::HedgeShell;

/// Validated configuration plus the reward source, ready to build shells.
#[derive(Clone)]
pub struct AppServices {
    schedule: TickSchedule,
    initial_counters: StatsCounters,
    rewards: Arc<dyn RewardSource>,
}

impl AppServices {
    /// # Errors
    ///
    /// Returns `AppServicesError::Config` if any config value is out of range.
    pub fn from_config(config: &HedgeConfig) -> Result<Self, AppServicesError> {
        let schedule = config.schedule()?;
        let initial_counters = config.initial_counters()?;
        let rewards: Arc<dyn RewardSource> = match config.fixed_reward()? {
            Some(points) => {
                tracing::info!(points = points.value(), "using fixed reward");
                Arc::new(FixedReward(points))
            }
            None => Arc::new(RandomReward),
        };

        Ok(Self {
            schedule,
            initial_counters,
            rewards,
        })
    }

    #[must_use]
    pub fn schedule(&self) -> TickSchedule {
        self.schedule
    }

    #[must_use]
    pub fn initial_counters(&self) -> StatsCounters {
        self.initial_counters
    }

    #[must_use]
    pub fn rewards(&self) -> Arc<dyn RewardSource> {
        Arc::clone(&self.rewards)
    }

    /// A fresh shell starting from the configured counters.
    #[must_use]
    pub fn new_shell(&self) -> HedgeShell {
        HedgeShell::new(self.initial_counters, self.schedule, self.rewards())
    }
}
