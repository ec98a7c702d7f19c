//! Sudoku houses: rows, columns, and 3×3 boxes.

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// Every cell belongs to exactly three houses. The Sudoku constraint is that
/// each house contains each digit at most once (exactly once in a completed
/// grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the nine positions contained in this house, in row-major
    /// order within the house.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, slot) in positions.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *slot = match self {
                House::Row { y } => Position::new(i, y),
                House::Column { x } => Position::new(x, i),
                House::Box { index } => Position::from_box(index, i),
            };
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_all_houses_cover_the_board_three_times() {
        let mut coverage = [0u8; 81];
        for house in House::ALL {
            for pos in house.positions() {
                coverage[pos.index()] += 1;
            }
        }
        assert!(coverage.iter().all(|&count| count == 3));
    }

    #[test]
    fn test_house_positions_are_distinct() {
        for house in House::ALL {
            let positions: BTreeSet<_> = house.positions().into_iter().collect();
            assert_eq!(positions.len(), 9);
        }
    }
}
