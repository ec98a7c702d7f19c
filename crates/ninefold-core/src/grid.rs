//! The 9×9 digit grid.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, House, Position};

/// A 9×9 grid of optional digits.
///
/// `None` represents an empty cell. The grid itself does not enforce Sudoku
/// constraints on mutation; validity is queried through
/// [`DigitGrid::is_valid_placement`] so that a player may enter a
/// conflicting digit and have it merely highlighted, not blocked.
///
/// Grids convert to and from an 81-character string in row-major order, with
/// `.` (or `0`) for empty cells. This is the representation used at the
/// persistence boundary.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.count_empty(), 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid([Option<Digit>; 81]);

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 81])
    }

    /// Returns the digit at the given position, or `None` if the cell is
    /// empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.0[pos.index()]
    }

    /// Sets or clears the cell at the given position.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.0[pos.index()] = digit;
    }

    /// Returns whether placing `digit` at `pos` would respect the Sudoku
    /// constraint: the digit must be absent from every *other* cell of the
    /// position's row, column, and 3×3 box.
    ///
    /// The cell at `pos` itself is ignored, so the check can be used both
    /// for empty cells during solving and for re-validating a cell that
    /// already holds the digit.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: Digit) -> bool {
        pos.house_peers().all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns an iterator over all empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Returns whether this grid is a valid completed Sudoku: every row,
    /// column, and box contains each of 1-9 exactly once.
    #[must_use]
    pub fn is_solved_grid(&self) -> bool {
        House::ALL.iter().all(|house| {
            let mut seen = [false; 9];
            for pos in house.positions() {
                let Some(digit) = self.get(pos) else {
                    return false;
                };
                let i = usize::from(digit.value()) - 1;
                if seen[i] {
                    return false;
                }
                seen[i] = true;
            }
            true
        })
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.0[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.0[pos.index()]
    }
}

/// Error returned when parsing a grid from its 81-character representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input was not exactly 81 characters long.
    #[display("grid string must be 81 characters, got {length}")]
    BadLength {
        /// Actual input length in characters.
        length: usize,
    },
    /// The input contained a character other than `1`-`9`, `0`, or `.`.
    #[display("invalid grid character {character:?} at index {index}")]
    BadCharacter {
        /// The offending character.
        character: char,
        /// Character index within the input.
        index: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != 81 {
            return Err(GridParseError::BadLength { length });
        }
        let mut grid = Self::new();
        for (index, character) in s.chars().enumerate() {
            let digit = match character {
                '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                _ => return Err(GridParseError::BadCharacter { character, index }),
            };
            grid.0[index] = digit;
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_parse_and_display_round_trip() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert_eq!(grid.to_string(), SOLVED);
        assert!(grid.is_complete());
        assert!(grid.is_solved_grid());
    }

    #[test]
    fn test_parse_accepts_zero_for_empty() {
        let dotted: DigitGrid = format!("12{}", ".".repeat(79)).parse().unwrap();
        let zeroed: DigitGrid = format!("12{}", "0".repeat(79)).parse().unwrap();
        assert_eq!(dotted, zeroed);
        assert_eq!(dotted.count_empty(), 79);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(GridParseError::BadLength { length: 3 })
        );
        let bad = format!("x{}", ".".repeat(80));
        assert_eq!(
            bad.parse::<DigitGrid>(),
            Err(GridParseError::BadCharacter {
                character: 'x',
                index: 0
            })
        );
    }

    #[test]
    fn test_is_valid_placement_checks_all_houses() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(4, 4), Some(Digit::D7));

        // Same row, column, and box all reject 7.
        assert!(!grid.is_valid_placement(Position::new(0, 4), Digit::D7));
        assert!(!grid.is_valid_placement(Position::new(4, 0), Digit::D7));
        assert!(!grid.is_valid_placement(Position::new(3, 3), Digit::D7));

        // Other digits and unrelated cells are fine.
        assert!(grid.is_valid_placement(Position::new(0, 4), Digit::D6));
        assert!(grid.is_valid_placement(Position::new(0, 0), Digit::D7));

        // The occupied cell itself is ignored by the check.
        assert!(grid.is_valid_placement(Position::new(4, 4), Digit::D7));
    }

    #[test]
    fn test_is_solved_grid_rejects_duplicates() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        let first = grid.get(Position::new(1, 0));
        grid.set(Position::new(0, 0), first);
        assert!(grid.is_complete());
        assert!(!grid.is_solved_grid());
    }

    #[test]
    fn test_empty_positions_in_row_major_order() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        grid.set(Position::new(3, 0), None);
        grid.set(Position::new(1, 2), None);
        let empties: Vec<_> = grid.empty_positions().collect();
        assert_eq!(empties, vec![Position::new(3, 0), Position::new(1, 2)]);
    }

    proptest! {
        #[test]
        fn prop_parse_display_round_trip(cells in prop::collection::vec(0u8..=9, 81)) {
            let text: String = cells
                .iter()
                .map(|&value| {
                    if value == 0 {
                        '.'
                    } else {
                        char::from(b'0' + value)
                    }
                })
                .collect();
            let grid: DigitGrid = text.parse().unwrap();
            prop_assert_eq!(grid.to_string(), text);
            prop_assert_eq!(grid.count_empty(), cells.iter().filter(|&&value| value == 0).count());
        }
    }
}
