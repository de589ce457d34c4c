use std::sync::Arc;

use hedge_core::TickSchedule;
use hedge_core::model::StatsCounters;
use services::{HedgeShell, RewardSource};

pub trait UiApp: Send + Sync {
    fn schedule(&self) -> TickSchedule;
    fn initial_counters(&self) -> StatsCounters;
    fn rewards(&self) -> Arc<dyn RewardSource>;
}

#[derive(Clone)]
pub struct AppContext {
    schedule: TickSchedule,
    initial_counters: StatsCounters,
    rewards: Arc<dyn RewardSource>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            schedule: app.schedule(),
            initial_counters: app.initial_counters(),
            rewards: app.rewards(),
        }
    }

    #[must_use]
    pub fn schedule(&self) -> TickSchedule {
        self.schedule
    }

    /// A fresh page shell. Each mounted home view owns exactly one.
    #[must_use]
    pub fn new_shell(&self) -> HedgeShell {
        HedgeShell::new(
            self.initial_counters,
            self.schedule,
            Arc::clone(&self.rewards),
        )
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
