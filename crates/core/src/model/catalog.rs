use crate::model::category::Category;

/// What a group's entries are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Quotes,
    Actions,
    Suggestions,
    Stories,
    Achievements,
}

/// How a group's entries are laid out in the hedge dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLayout {
    /// One entry at a time, picked by the session's display cycle index.
    Rotating,
    /// The first `limit` entries as a list.
    Listed { limit: usize },
    /// Every entry as a badge.
    Badges,
}

/// A titled, ordered, non-empty run of display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentGroup {
    pub kind: ContentKind,
    pub icon: &'static str,
    pub heading: &'static str,
    pub layout: GroupLayout,
    pub entries: &'static [&'static str],
}

impl ContentGroup {
    /// Entry shown for a rotating group at the given cycle index.
    #[must_use]
    pub fn rotating_entry(&self, cycle_index: usize) -> &'static str {
        self.entries[cycle_index % self.entries.len()]
    }

    /// Entries visible for this group's layout.
    #[must_use]
    pub fn visible_entries(&self, cycle_index: usize) -> Vec<&'static str> {
        match self.layout {
            GroupLayout::Rotating => vec![self.rotating_entry(cycle_index)],
            GroupLayout::Listed { limit } => self.entries.iter().take(limit).copied().collect(),
            GroupLayout::Badges => self.entries.to_vec(),
        }
    }
}

const QUOTES: &[&str] = &[
    "每一次拒绝都是通往成功的必经之路。",
    "被拒绝不是失败，而是筛选出更适合的机会。",
    "你的价值不由一次拒绝来定义。",
    "今天的拒绝是明天成功的垫脚石。",
];

const ACTIONS: &[&str] = &[
    "深呼吸3次，感受当下的平静",
    "给自己一个温暖的拥抱",
    "回忆最近收到的积极反馈",
    "为自己今天的努力点个赞",
];

const SUGGESTIONS: &[&str] = &[
    "分析拒稿原因，制定改进计划",
    "寻找3个类似期刊作为备选",
    "联系导师或同行获取建议",
    "优化论文标题和摘要",
    "检查期刊投稿要求是否完全符合",
];

const STORIES: &[&str] = &[
    "李同学：被拒7次后发表在顶级期刊",
    "张教授：分享投稿被拒后的调整经验",
    "科研小组：互相鼓励度过低谷期",
    "学术社区：分享拒稿后的成长故事",
];

const ACHIEVEMENTS: &[&str] = &[
    "勇气徽章：直面拒绝",
    "坚持勋章：不放弃投稿",
    "成长印记：从拒绝中学习",
    "韧性标识：迅速重新振作",
];

static EMOTIONAL: [ContentGroup; 2] = [
    ContentGroup {
        kind: ContentKind::Quotes,
        icon: "💝",
        heading: "治愈金句",
        layout: GroupLayout::Rotating,
        entries: QUOTES,
    },
    ContentGroup {
        kind: ContentKind::Actions,
        icon: "🫂",
        heading: "自我关怀行动",
        layout: GroupLayout::Rotating,
        entries: ACTIONS,
    },
];

static PRACTICAL: [ContentGroup; 1] = [ContentGroup {
    kind: ContentKind::Suggestions,
    icon: "💡",
    heading: "实用建议",
    layout: GroupLayout::Listed { limit: 3 },
    entries: SUGGESTIONS,
}];

static COMMUNITY: [ContentGroup; 1] = [ContentGroup {
    kind: ContentKind::Stories,
    icon: "🤝",
    heading: "社区力量",
    layout: GroupLayout::Listed { limit: 2 },
    entries: STORIES,
}];

static GAMIFIED: [ContentGroup; 1] = [ContentGroup {
    kind: ContentKind::Achievements,
    icon: "🏆",
    heading: "成就解锁",
    layout: GroupLayout::Badges,
    entries: ACHIEVEMENTS,
}];

/// Display groups for a category, in render order.
#[must_use]
pub fn catalog_for(category: Category) -> &'static [ContentGroup] {
    match category {
        Category::Emotional => &EMOTIONAL,
        Category::Practical => &PRACTICAL,
        Category::Community => &COMMUNITY,
        Category::Gamified => &GAMIFIED,
    }
}
