use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("unknown hedge category: {0:?}")]
    Unknown(String),
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// The four coping strategies a user can pick from.
///
/// The set is closed; every table keyed by category resolves through an
/// exhaustive `match`, so adding a variant fails to compile until each table
/// has an entry for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Mindfulness, self-care and healing quotes.
    Emotional,
    /// Concrete next steps after a rejection.
    Practical,
    /// Stories and support from peers.
    Community,
    /// Badges and achievements.
    Gamified,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Emotional,
        Category::Practical,
        Category::Community,
        Category::Gamified,
    ];

    /// Stable machine name, used by the CLI and config files.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Emotional => "emotional",
            Category::Practical => "practical",
            Category::Community => "community",
            Category::Gamified => "gamified",
        }
    }

    /// Short type label shown on the strategy card.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Emotional => "情感支持",
            Category::Practical => "实用建议",
            Category::Community => "社区互助",
            Category::Gamified => "游戏化",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryError::Unknown(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
        assert_eq!(" Practical ".parse::<Category>().unwrap(), Category::Practical);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "stoic".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryError::Unknown("stoic".to_string()));
    }

    #[test]
    fn labels_match_card_badges() {
        assert_eq!(Category::Emotional.label(), "情感支持");
        assert_eq!(Category::Gamified.label(), "游戏化");
    }
}
