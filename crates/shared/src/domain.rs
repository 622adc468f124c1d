use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(CatalogItemId);
id_newtype!(OutfitId);

/// Fixed catalog groups. The payload always carries both, possibly empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Dresses,
    Casual,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Dresses, Category::Casual];

    pub fn key(self) -> &'static str {
        match self {
            Category::Dresses => "dresses",
            Category::Casual => "casual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Dresses => "Dresses",
            Category::Casual => "Casual",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog category '{0}' (expected one of: dresses, casual)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TryOnPhase {
    #[default]
    Idle,
    Running,
    Completed,
}

impl TryOnPhase {
    pub fn label(self) -> &'static str {
        match self {
            TryOnPhase::Idle => "Ready",
            TryOnPhase::Running => "Processing...",
            TryOnPhase::Completed => "Complete",
        }
    }
}
