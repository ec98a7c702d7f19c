use ninefold_core::Digit;

/// The state of a single cell as seen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A clue from the generated problem; immutable for the session.
    Given(Digit),
    /// A digit entered by the player (possibly conflicting or wrong).
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// Returns the digit held by this cell, if any.
    #[must_use]
    pub fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Given(Digit::D3).as_digit(), Some(Digit::D3));
        assert_eq!(CellState::Filled(Digit::D8).as_digit(), Some(Digit::D8));
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_variant_queries() {
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(CellState::Empty.is_empty());
        assert!(!CellState::Empty.is_given());
    }
}
