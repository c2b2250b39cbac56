use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// the fixed set of content buckets
//
// the order of ALL is the order of the tiles on the home page and of the
// options in the upload form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Marriage,
    Haldi,
    Engagement,
    Birthday,
    Reception,
    Temple,
    Home,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Marriage,
        Category::Haldi,
        Category::Engagement,
        Category::Birthday,
        Category::Reception,
        Category::Temple,
        Category::Home,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Marriage => "marriage",
            Category::Haldi => "haldi",
            Category::Engagement => "engagement",
            Category::Birthday => "birthday",
            Category::Reception => "reception",
            Category::Temple => "temple",
            Category::Home => "home",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Marriage => "Marriage Decorations",
            Category::Haldi => "Haldi Decorations",
            Category::Engagement => "Engagement Decorations",
            Category::Birthday => "Birthday Decorations",
            Category::Reception => "Reception Decorations",
            Category::Temple => "Temple Decorations",
            Category::Home => "Home Decorations",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Marriage => "💒",
            Category::Haldi => "🌼",
            Category::Engagement => "💍",
            Category::Birthday => "🎂",
            Category::Reception => "🎊",
            Category::Temple => "🛕",
            Category::Home => "🏡",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown category {s}")))
    }
}
