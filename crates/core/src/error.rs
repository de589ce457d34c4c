use thiserror::Error;

use crate::model::{CategoryError, RewardError, SessionError, StatsError};
use crate::time::ScheduleError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    Reward(#[from] RewardError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
