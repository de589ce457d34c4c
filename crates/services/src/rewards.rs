use rand::Rng;

use hedge_core::model::RewardPoints;

/// Where collected rewards come from.
pub trait RewardSource: Send + Sync {
    fn draw(&self) -> RewardPoints;
}

/// Uniform draw over the full reward range.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReward;

impl RewardSource for RandomReward {
    fn draw(&self) -> RewardPoints {
        RewardPoints::from_offset(rand::rng().random_range(0..RewardPoints::SPREAD))
    }
}

/// Always grants the same amount. Used by tests and `[reward] fixed = N`.
#[derive(Debug, Clone, Copy)]
pub struct FixedReward(pub RewardPoints);

impl RewardSource for FixedReward {
    fn draw(&self) -> RewardPoints {
        self.0
    }
}
