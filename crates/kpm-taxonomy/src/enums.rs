//! Shared enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Difficulty grade of a Teil, a question, or a whole protocol.
///
/// Stored in documents as the lowercase German word; an empty string in a
/// document means "not graded yet" and is represented by the *absence* of
/// a parsed value, not by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schwierigkeit {
    Leicht,
    Mittel,
    Schwer,
}

impl Schwierigkeit {
    /// Parse a document value. Returns `None` for anything outside the
    /// three allowed grades (callers decide whether that is a violation).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "leicht" => Some(Self::Leicht),
            "mittel" => Some(Self::Mittel),
            "schwer" => Some(Self::Schwer),
            _ => None,
        }
    }

    /// The canonical document spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leicht => "leicht",
            Self::Mittel => "mittel",
            Self::Schwer => "schwer",
        }
    }

    /// All grades in ascending order.
    pub const fn all() -> &'static [Schwierigkeit] {
        &[Self::Leicht, Self::Mittel, Self::Schwer]
    }
}

impl fmt::Display for Schwierigkeit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schwierigkeit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown Schwierigkeitsgrad: {s}"))
    }
}
