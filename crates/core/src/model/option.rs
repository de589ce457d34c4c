use crate::model::category::Category;

/// Title used when the emergency button opens an emotional session.
pub const EMERGENCY_TITLE: &str = "紧急情感修复";

/// A strategy card offered on the main page.
///
/// `base_points` is only shown as a preview badge. The amount actually granted
/// on collection is drawn from [`RewardPoints`](crate::model::RewardPoints)'s
/// range and does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HedgeOption {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub base_points: u32,
}

const EMOTIONAL: HedgeOption = HedgeOption {
    title: "情感修复疗法",
    description: "通过正念冥想、自我关怀练习和治愈金句来缓解被拒的负面情绪，重建内心平静。",
    icon: "💝",
    category: Category::Emotional,
    base_points: 15,
};

const PRACTICAL: HedgeOption = HedgeOption {
    title: "策略重构系统",
    description: "分析拒稿原因，制定改进计划，寻找替代期刊，优化投稿策略。",
    icon: "🎯",
    category: Category::Practical,
    base_points: 25,
};

const COMMUNITY: HedgeOption = HedgeOption {
    title: "同行支持网络",
    description: "连接有相似经历的学者，分享经验，获得鼓励，建立学术互助关系。",
    icon: "🤝",
    category: Category::Community,
    base_points: 20,
};

const GAMIFIED: HedgeOption = HedgeOption {
    title: "成就解锁游戏",
    description: "将拒稿经历转化为经验值，解锁韧性徽章，在挫折中获得成长感。",
    icon: "🏆",
    category: Category::Gamified,
    base_points: 30,
};

static OPTIONS: [HedgeOption; 4] = [EMOTIONAL, PRACTICAL, COMMUNITY, GAMIFIED];

impl HedgeOption {
    /// The four cards in display order.
    #[must_use]
    pub fn all() -> &'static [HedgeOption; 4] {
        &OPTIONS
    }

    #[must_use]
    pub fn for_category(category: Category) -> &'static HedgeOption {
        match category {
            Category::Emotional => &OPTIONS[0],
            Category::Practical => &OPTIONS[1],
            Category::Community => &OPTIONS[2],
            Category::Gamified => &OPTIONS[3],
        }
    }
}
