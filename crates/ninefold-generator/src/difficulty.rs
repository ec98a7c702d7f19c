use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Puzzle difficulty tier.
///
/// Each tier maps to a fixed number of cells blanked out of 81; the removal
/// counts can be overridden through
/// [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 30 cells removed, 51 givens.
    Easy,
    /// 50 cells removed, 31 givens.
    Hard,
}

impl Difficulty {
    /// Returns the default number of cells to blank for this tier.
    #[must_use]
    pub const fn cells_to_remove(self) -> usize {
        match self {
            Self::Easy => 30,
            Self::Hard => 50,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}
