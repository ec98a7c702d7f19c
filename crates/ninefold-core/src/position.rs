//! Board position (x, y) coordinates.

use std::fmt::{self, Display};

use crate::House;

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions are cheap to copy and are the only way to index a
/// [`DigitGrid`](crate::DigitGrid).
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7); // middle box of the bottom band
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order (left to right,
    /// top to bottom).
    ///
    /// Row-major order is load-bearing for the generator's cell scan and for
    /// hint tie-breaking.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from `x` (column) and `y` (row) coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position coordinates must be in 0..=8");
        Self { x, y }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3×3 box containing this position (0-8, left
    /// to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Converts a box index (0-8) and a cell index within that box (0-8, in
    /// row-major order) into an absolute position.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self::new(
            (box_index % 3) * 3 + cell % 3,
            (box_index / 3) * 3 + cell / 3,
        )
    }

    /// Returns the row-major linear index of this position (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the 20 distinct peers of this position: the other cells in
    /// its row, column, and 3×3 box.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).house_peers().count(), 20);
    /// ```
    pub fn house_peers(self) -> impl Iterator<Item = Self> {
        let row = House::Row { y: self.y }.positions();
        let column = House::Column { x: self.x }.positions();
        let boxed = House::Box {
            index: self.box_index(),
        }
        .positions();
        row.into_iter()
            .chain(column)
            // Box cells sharing this row or column are already covered.
            .chain(
                boxed
                    .into_iter()
                    .filter(move |p| p.x != self.x && p.y != self.y),
            )
            .filter(move |&p| p != self)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
