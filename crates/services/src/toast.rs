use hedge_core::model::RewardPoints;

/// A transient notification. Fire-and-forget; nothing waits on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Notification shown after a reward is applied.
    #[must_use]
    pub fn reward(points: RewardPoints) -> Self {
        Self::new(
            "对冲成功！",
            format!("获得 {} 治愈积分，心情已得到修复 ✨", points.value()),
        )
    }
}
