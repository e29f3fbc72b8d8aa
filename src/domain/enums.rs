use serde::{Deserialize, Serialize};

/// Task category, a fixed catalog of five
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Shopping,
    Education,
    Health,
}

impl Category {
    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::Health => "Health",
        }
    }

    /// Display color as RGB
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Category::Work => (0x34, 0x98, 0xdb),
            Category::Personal => (0xe7, 0x4c, 0x3c),
            Category::Shopping => (0x2e, 0xcc, 0x71),
            Category::Education => (0x9b, 0x59, 0xb6),
            Category::Health => (0xe8, 0x43, 0x93),
        }
    }

    /// Icon glyph, with an ASCII fallback
    pub fn icon(&self, use_emoji: bool) -> &'static str {
        if use_emoji {
            match self {
                Category::Work => "💼",
                Category::Personal => "👤",
                Category::Shopping => "🛒",
                Category::Education => "🎓",
                Category::Health => "❤️",
            }
        } else {
            match self {
                Category::Work => "W",
                Category::Personal => "P",
                Category::Shopping => "S",
                Category::Education => "E",
                Category::Health => "H",
            }
        }
    }

    /// Get all categories in catalog order
    pub fn all() -> &'static [Category] {
        &[
            Category::Work,
            Category::Personal,
            Category::Shopping,
            Category::Education,
            Category::Health,
        ]
    }
}

/// Task priority. Urgent sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Priority::Low => (0x2e, 0xcc, 0x71),
            Priority::Medium => (0xf1, 0xc4, 0x0f),
            Priority::High => (0xe7, 0x4c, 0x3c),
            Priority::Urgent => (0xc0, 0x39, 0x2b),
        }
    }

    pub fn icon(&self, use_emoji: bool) -> &'static str {
        if use_emoji {
            match self {
                Priority::Low => "↓",
                Priority::Medium => "→",
                Priority::High => "↑",
                Priority::Urgent => "⚠",
            }
        } else {
            match self {
                Priority::Low => "v",
                Priority::Medium => ">",
                Priority::High => "^",
                Priority::Urgent => "!",
            }
        }
    }

    /// Sort rank (urgent=0 .. low=3)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Get all priorities in catalog order (low to urgent)
    pub fn all() -> &'static [Priority] {
        &[
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    AddingSubtask,
    SelectingCategory,
    SelectingPriority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_are_complete() {
        assert_eq!(Category::all().len(), 5);
        assert_eq!(Priority::all().len(), 4);
        assert_eq!(Category::all()[4], Category::Health);
        assert_eq!(Priority::all()[3], Priority::Urgent);
    }

    #[test]
    fn test_unknown_serde_name_rejected() {
        assert!(serde_json::from_str::<Priority>("\"critical\"").is_err());
        assert!(serde_json::from_str::<Category>("\"travel\"").is_err());
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::Urgent.rank() < Priority::High.rank());
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_icon_ascii_fallback() {
        assert_eq!(Priority::Urgent.icon(false), "!");
        assert_eq!(Category::Shopping.icon(false), "S");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let category: Category = serde_json::from_str("\"education\"").unwrap();
        assert_eq!(category, Category::Education);
    }
}
