use thiserror::Error;

use crate::model::catalog::{ContentGroup, catalog_for};
use crate::model::category::Category;

/// Progress value at which a session completes.
pub const PROGRESS_MAX: u8 = 100;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no hedge session is open")]
    NoActiveSession,

    #[error("hedge session is still running ({progress}%)")]
    NotCompleted { progress: u8 },
}

//
// ─── PHASE / TICKS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Completed,
}

/// Result of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced { progress: u8 },
    /// Progress reached 100 on this tick.
    Completed,
    /// The tick belongs to a session that is closed, replaced or already
    /// complete. Nothing changed.
    Ignored,
}

impl TickOutcome {
    /// Whether the ticker should keep scheduling ticks.
    #[must_use]
    pub fn keeps_running(self) -> bool {
        matches!(self, TickOutcome::Advanced { .. })
    }
}

/// Identifies the session a ticker was started for.
///
/// Every open and close bumps the slot's epoch, so a token held by a ticker
/// that outlived its session no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// One in-progress hedge: progress towards 100 for a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedgeSession {
    category: Category,
    title: String,
    progress: u8,
    completed: bool,
    // Never advanced; rotating groups always show their first entry.
    display_cycle_index: usize,
}

impl HedgeSession {
    #[must_use]
    pub fn new(category: Category, title: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            progress: 0,
            completed: false,
            display_cycle_index: 0,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn display_cycle_index(&self) -> usize {
        self.display_cycle_index
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.completed {
            SessionPhase::Completed
        } else {
            SessionPhase::Running
        }
    }

    /// Catalog groups for this session's category.
    #[must_use]
    pub fn content(&self) -> &'static [ContentGroup] {
        catalog_for(self.category)
    }

    /// Moves progress forward by `step`, completing at 100.
    pub fn advance(&mut self, step: u8) -> TickOutcome {
        if self.completed {
            return TickOutcome::Ignored;
        }
        self.progress = self.progress.saturating_add(step).min(PROGRESS_MAX);
        if self.progress == PROGRESS_MAX {
            self.completed = true;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced {
                progress: self.progress,
            }
        }
    }
}

//
// ─── SLOT ─────────────────────────────────────────────────────────────────────
//

/// Holds at most one open session.
///
/// Empty means `Idle`. Opening replaces whatever was open before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSlot {
    active: Option<HedgeSession>,
    epoch: u64,
}

impl SessionSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.active
            .as_ref()
            .map_or(SessionPhase::Idle, HedgeSession::phase)
    }

    #[must_use]
    pub fn session(&self) -> Option<&HedgeSession> {
        self.active.as_ref()
    }

    /// Opens a fresh session, implicitly closing the previous one.
    pub fn open(&mut self, category: Category, title: impl Into<String>) -> SessionToken {
        self.epoch = self.epoch.wrapping_add(1);
        self.active = Some(HedgeSession::new(category, title));
        SessionToken(self.epoch)
    }

    /// Whether `token` still refers to the open session.
    #[must_use]
    pub fn is_current(&self, token: SessionToken) -> bool {
        self.active.is_some() && token.0 == self.epoch
    }

    /// Delivers a tick. Stale tokens are no-ops.
    pub fn tick(&mut self, token: SessionToken, step: u8) -> TickOutcome {
        if !self.is_current(token) {
            return TickOutcome::Ignored;
        }
        match self.active.as_mut() {
            Some(session) => session.advance(step),
            None => TickOutcome::Ignored,
        }
    }

    /// Returns to `Idle`, invalidating outstanding tokens.
    pub fn close(&mut self) -> Option<HedgeSession> {
        self.epoch = self.epoch.wrapping_add(1);
        self.active.take()
    }

    /// Closes a completed session and hands it back for reward.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` when idle and
    /// `SessionError::NotCompleted` while the session is still running; the
    /// slot is left untouched in both cases.
    pub fn take_completed(&mut self) -> Result<HedgeSession, SessionError> {
        match self.active.as_ref() {
            None => Err(SessionError::NoActiveSession),
            Some(session) if !session.is_completed() => Err(SessionError::NotCompleted {
                progress: session.progress(),
            }),
            Some(_) => self.close().ok_or(SessionError::NoActiveSession),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
