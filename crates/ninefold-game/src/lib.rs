//! Game session logic for the Ninefold Sudoku game.
//!
//! [`Game`] tracks the board as the player sees it: given (initial) cells,
//! player-filled cells, and empties, alongside the immutable solution. It
//! answers conflict and win queries and selects hint targets.
//!
//! [`Session`] wraps a game with everything a play session needs beyond the
//! board: the selected cell, a pause-aware clock, the hint budget, the
//! player's name, and the difficulty. The presentation layer drives a
//! session exclusively through its command methods.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::{Difficulty, PuzzleGenerator};
//! use ninefold_game::Session;
//!
//! let puzzle = PuzzleGenerator::new()
//!     .generate_with_seed(Difficulty::Easy, 42)
//!     .unwrap();
//! let mut session = Session::new(&puzzle, "Ann");
//!
//! assert_eq!(session.hint_count(), 3);
//! assert!(!session.is_won());
//! let revealed = session.request_hint();
//! assert!(revealed.is_some());
//! assert_eq!(session.hint_count(), 2);
//! ```

mod cell_state;
mod error;
mod game;
mod session;

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::Game,
    session::{Session, SessionClock},
};
