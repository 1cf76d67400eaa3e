//! Outcome families

use serde::{Deserialize, Serialize};

/// One of the three independent outcome categories scored in parallel
///
/// Iteration order is always [`Family::ALL`]: race, class, background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Race,
    Class,
    Background,
}

impl Family {
    /// All families in scoring order
    pub const ALL: [Family; 3] = [Family::Race, Family::Class, Family::Background];

    /// Position of this family in [`Family::ALL`]
    pub fn index(self) -> usize {
        match self {
            Family::Race => 0,
            Family::Class => 1,
            Family::Background => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Race => "race",
            Family::Class => "class",
            Family::Background => "background",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Family::Race => "Race",
            Family::Class => "Class",
            Family::Background => "Background",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "race" | "races" => Ok(Family::Race),
            "class" | "classes" => Ok(Family::Class),
            "background" | "backgrounds" => Ok(Family::Background),
            _ => Err(format!(
                "Unknown family: {}. Valid: race, class, background",
                s
            )),
        }
    }
}
