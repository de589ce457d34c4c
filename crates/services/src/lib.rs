#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod rewards;
pub mod shell;
pub mod ticker;
pub mod toast;

pub use hedge_core::TickSchedule;

pub use app_services::AppServices;
pub use config::HedgeConfig;
pub use error::{AppServicesError, ConfigError, HedgeError};
pub use rewards::{FixedReward, RandomReward, RewardSource};
pub use shell::{HedgeShell, RewardReceipt};
pub use ticker::{SharedShell, TickHandle, tick_until_settled};
pub use toast::Toast;
