mod catalog;
mod category;
mod option;
mod reward;
mod session;
mod stats;

pub use catalog::{ContentGroup, ContentKind, GroupLayout, catalog_for};
pub use category::{Category, CategoryError};
pub use option::{EMERGENCY_TITLE, HedgeOption};
pub use reward::{RewardError, RewardPoints};
pub use session::{
    HedgeSession, PROGRESS_MAX, SessionError, SessionPhase, SessionSlot, SessionToken,
    TickOutcome,
};
pub use stats::{Advisory, PERCENT_MAX, StatsCounters, StatsError, StatsView};
