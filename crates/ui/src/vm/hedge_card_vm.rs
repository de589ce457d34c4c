use hedge_core::model::{Category, HedgeOption};

/// UI-ready strategy card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HedgeCardVm {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub type_label: &'static str,
    /// Preview only; the granted amount is drawn on collect.
    pub points_badge: Option<String>,
    pub tone_class: &'static str,
}

/// CSS tone used by cards and dialog sections of a category.
#[must_use]
pub fn tone_class(category: Category) -> &'static str {
    match category {
        Category::Emotional => "tone-warm",
        Category::Practical => "tone-calm",
        Category::Community => "tone-comfort",
        Category::Gamified => "tone-primary",
    }
}

#[must_use]
pub fn map_hedge_card(option: &HedgeOption) -> HedgeCardVm {
    HedgeCardVm {
        category: option.category,
        title: option.title,
        description: option.description,
        icon: option.icon,
        type_label: option.category.label(),
        points_badge: (option.base_points > 0).then(|| format!("+{}分", option.base_points)),
        tone_class: tone_class(option.category),
    }
}

#[must_use]
pub fn map_hedge_cards(options: &[HedgeOption]) -> Vec<HedgeCardVm> {
    options.iter().map(map_hedge_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_carry_badges_and_labels() {
        let cards = map_hedge_cards(HedgeOption::all());
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "情感修复疗法");
        assert_eq!(cards[0].type_label, "情感支持");
        assert_eq!(cards[0].points_badge.as_deref(), Some("+15分"));
        assert_eq!(cards[3].points_badge.as_deref(), Some("+30分"));
        assert_eq!(cards[1].tone_class, "tone-calm");
    }

    #[test]
    fn zero_points_hide_the_badge() {
        let option = HedgeOption {
            base_points: 0,
            ..*HedgeOption::for_category(Category::Community)
        };
        assert_eq!(map_hedge_card(&option).points_badge, None);
    }
}
