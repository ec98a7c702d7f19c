//! Core board model for the Ninefold Sudoku game.
//!
//! This crate provides the fundamental types shared by the generator, game,
//! and persistence components:
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`position`]: Board position (x, y) coordinates and peer enumeration
//! - [`house`]: Rows, columns, and 3×3 boxes
//! - [`grid`]: The 9×9 [`DigitGrid`] with placement-validity checks and an
//!   81-character text representation
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 is no longer a valid placement anywhere in row 0, column 0,
//! // or the top-left box.
//! assert!(!grid.is_valid_placement(Position::new(8, 0), Digit::D5));
//! assert!(!grid.is_valid_placement(Position::new(0, 8), Digit::D5));
//! assert!(!grid.is_valid_placement(Position::new(2, 2), Digit::D5));
//! assert!(grid.is_valid_placement(Position::new(8, 8), Digit::D5));
//! ```

pub mod digit;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{DigitGrid, GridParseError},
    house::House,
    position::Position,
};
