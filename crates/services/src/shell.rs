use std::sync::Arc;

use hedge_core::TickSchedule;
use hedge_core::model::{
    Category, EMERGENCY_TITLE, HedgeOption, HedgeSession, RewardPoints, SessionPhase,
    SessionSlot, SessionToken, StatsCounters, StatsView, TickOutcome,
};

use crate::error::HedgeError;
use crate::rewards::RewardSource;
use crate::toast::Toast;

/// What a successful collect produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardReceipt {
    pub category: Category,
    pub points: RewardPoints,
    pub counters: StatsCounters,
    pub toast: Toast,
}

/// Top-level page state: the counters and the single session slot.
///
/// Built once when the shell starts and dropped at teardown. Counters change
/// only through [`HedgeShell::collect`]; the slot only through open, tick,
/// dismiss and collect.
pub struct HedgeShell {
    counters: StatsCounters,
    slot: SessionSlot,
    schedule: TickSchedule,
    rewards: Arc<dyn RewardSource>,
}

impl HedgeShell {
    #[must_use]
    pub fn new(
        counters: StatsCounters,
        schedule: TickSchedule,
        rewards: Arc<dyn RewardSource>,
    ) -> Self {
        Self {
            counters,
            slot: SessionSlot::new(),
            schedule,
            rewards,
        }
    }

    #[must_use]
    pub fn counters(&self) -> StatsCounters {
        self.counters
    }

    #[must_use]
    pub fn stats_view(&self) -> StatsView {
        self.counters.derive_view()
    }

    #[must_use]
    pub fn schedule(&self) -> TickSchedule {
        self.schedule
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.slot.phase()
    }

    #[must_use]
    pub fn session(&self) -> Option<&HedgeSession> {
        self.slot.session()
    }

    /// Opens the session behind a strategy card.
    pub fn open(&mut self, option: &HedgeOption) -> SessionToken {
        self.open_titled(option.category, option.title)
    }

    /// Opens an emotional session from the emergency button.
    pub fn open_emergency(&mut self) -> SessionToken {
        self.open_titled(Category::Emotional, EMERGENCY_TITLE)
    }

    /// Opens a session, replacing any session that was still open.
    pub fn open_titled(&mut self, category: Category, title: &str) -> SessionToken {
        if let Some(previous) = self.slot.session() {
            tracing::debug!(
                category = %previous.category(),
                progress = previous.progress(),
                "replacing open hedge session"
            );
        }
        let token = self.slot.open(category, title);
        tracing::debug!(%category, title, "hedge session opened");
        token
    }

    /// Advances the session `token` was issued for by one step.
    pub fn tick(&mut self, token: SessionToken) -> TickOutcome {
        let outcome = self.slot.tick(token, self.schedule.step());
        match outcome {
            TickOutcome::Completed => {
                if let Some(session) = self.slot.session() {
                    tracing::debug!(category = %session.category(), "hedge session completed");
                }
            }
            TickOutcome::Ignored => tracing::trace!(?token, "ignored stale tick"),
            TickOutcome::Advanced { .. } => {}
        }
        outcome
    }

    /// Closes the dialog without collecting. Returns whether anything was open.
    pub fn dismiss(&mut self) -> bool {
        match self.slot.close() {
            Some(session) => {
                tracing::debug!(
                    category = %session.category(),
                    progress = session.progress(),
                    "hedge session dismissed"
                );
                true
            }
            None => false,
        }
    }

    /// Collects the reward of a completed session and folds it into the
    /// counters. The slot returns to idle.
    ///
    /// # Errors
    ///
    /// Returns `HedgeError::Session` if nothing is open or the session has
    /// not completed yet; counters are unchanged in that case.
    pub fn collect(&mut self) -> Result<RewardReceipt, HedgeError> {
        let session = self.slot.take_completed()?;
        let points = self.rewards.draw();
        self.counters = self.counters.apply_reward(points);
        tracing::info!(
            category = %session.category(),
            points = points.value(),
            total_points = self.counters.total_points(),
            "hedge reward applied"
        );
        Ok(RewardReceipt {
            category: session.category(),
            points,
            counters: self.counters,
            toast: Toast::reward(points),
        })
    }
}
