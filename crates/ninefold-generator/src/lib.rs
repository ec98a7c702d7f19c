//! Sudoku puzzle generation for the Ninefold game.
//!
//! The generator produces a pair of grids: a complete valid *solution* and a
//! *problem* derived from it by blanking a difficulty-dependent number of
//! cells. Construction works in three steps:
//!
//! 1. Seed the three diagonal 3×3 boxes with random permutations of 1-9.
//!    They share no rows, columns, or boxes with each other, so this cannot
//!    introduce a conflict; it only shortens the search.
//! 2. Fill the remaining cells with a depth-first backtracking search
//!    ([`backtrack`]).
//! 3. Shuffle all 81 positions and blank the first
//!    [`Difficulty::cells_to_remove`] of them in a copy of the solution.
//!
//! Randomness is drawn from a [`rand_pcg::Pcg64Mcg`] seeded explicitly, so a
//! given seed reproduces the same `(solution, problem)` pair bit for bit.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator
//!     .generate_with_seed(Difficulty::Easy, 42)
//!     .expect("diagonal-seeded grids are always completable");
//!
//! assert!(puzzle.solution.is_solved_grid());
//! assert_eq!(puzzle.problem.count_empty(), 30);
//! ```

pub mod backtrack;
mod difficulty;
mod generator;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, GeneratorConfig, GeneratorError, PuzzleGenerator},
};
