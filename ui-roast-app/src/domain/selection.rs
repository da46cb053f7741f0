use serde::{Deserialize, Serialize};

/// Critique persona that sets the voice of a roast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Judge {
    Gordon,
    Grandma,
    IpadKid,
}

impl Judge {
    pub const ALL: [Judge; 3] = [Judge::Gordon, Judge::Grandma, Judge::IpadKid];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Gordon => "gordon",
            Self::Grandma => "grandma",
            Self::IpadKid => "ipad_kid",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gordon => "Gordon Ramsay",
            Self::Grandma => "Grandma",
            Self::IpadKid => "iPad Kid",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Gordon => "🍳",
            Self::Grandma => "👵",
            Self::IpadKid => "📱",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Gordon => "Brutal, no-nonsense design critique",
            Self::Grandma => "Hates tech, loves simplicity",
            Self::IpadKid => "Short attention span, needs instant clarity",
        }
    }

    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "gordon" | "ramsay" => Some(Self::Gordon),
            "grandma" => Some(Self::Grandma),
            "ipad_kid" | "ipadkid" => Some(Self::IpadKid),
            _ => None,
        }
    }
}

/// Design-review focus area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Colors,
    Typography,
    Spacing,
    Usability,
    Content,
    Accessibility,
    Full,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Colors,
        Category::Typography,
        Category::Spacing,
        Category::Usability,
        Category::Content,
        Category::Accessibility,
        Category::Full,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Usability => "usability",
            Self::Content => "content",
            Self::Accessibility => "accessibility",
            Self::Full => "full",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Colors => "Colors",
            Self::Typography => "Typography",
            Self::Spacing => "Spacing & layout",
            Self::Usability => "Usability",
            Self::Content => "Content & copy",
            Self::Accessibility => "Accessibility",
            Self::Full => "Full review",
        }
    }

    fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == tag)
    }
}

/// What a roast is keyed on. Anything unrecognized lands on `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Judge(Judge),
    Category(Category),
    Generic,
}

impl Selection {
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag.map(|t| t.trim().to_ascii_lowercase()) else {
            return Self::Generic;
        };

        if let Some(judge) = Judge::parse(&tag) {
            Self::Judge(judge)
        } else if let Some(category) = Category::parse(&tag) {
            Self::Category(category)
        } else {
            Self::Generic
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Judge(judge) => judge.id(),
            Self::Category(category) => category.id(),
            Self::Generic => "generic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Judge(judge) => judge.name(),
            Self::Category(category) => category.label(),
            Self::Generic => "the AI judge",
        }
    }
}
