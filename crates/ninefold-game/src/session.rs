use std::time::{Duration, Instant};

use ninefold_core::{Digit, Position};
use ninefold_generator::{Difficulty, GeneratedPuzzle};

use crate::{Game, GameError};

/// Hints available at the start of every game.
pub const DEFAULT_HINT_BUDGET: u32 = 3;

/// A wall clock that stops while the game is paused.
///
/// Elapsed time is the accumulated duration of completed run segments plus
/// the current segment, if one is running. Restored sessions start from the
/// saved elapsed duration.
#[derive(Debug, Clone)]
pub struct SessionClock {
    accumulated: Duration,
    resumed_at: Option<Instant>,
}

impl SessionClock {
    /// Creates a running clock starting from zero.
    #[must_use]
    pub fn running() -> Self {
        Self::running_from(Duration::ZERO)
    }

    /// Creates a running clock that has already accumulated `elapsed`.
    #[must_use]
    pub fn running_from(elapsed: Duration) -> Self {
        Self {
            accumulated: elapsed,
            resumed_at: Some(Instant::now()),
        }
    }

    /// Creates a paused clock frozen at `elapsed`.
    #[must_use]
    pub fn paused_at(elapsed: Duration) -> Self {
        Self {
            accumulated: elapsed,
            resumed_at: None,
        }
    }

    /// Returns whether the clock is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.resumed_at.is_none()
    }

    /// Pauses the clock, folding the current run segment into the
    /// accumulated total. Pausing a paused clock is a no-op.
    pub fn pause(&mut self) {
        if let Some(resumed_at) = self.resumed_at.take() {
            self.accumulated += resumed_at.elapsed();
        }
    }

    /// Resumes a paused clock. Resuming a running clock is a no-op.
    pub fn resume(&mut self) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    /// Pauses a running clock or resumes a paused one.
    pub fn toggle(&mut self) {
        if self.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Returns the total elapsed play time, excluding paused stretches.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.resumed_at {
            Some(resumed_at) => self.accumulated + resumed_at.elapsed(),
            None => self.accumulated,
        }
    }
}

/// An interactive play session: a [`Game`] plus selection, timing, pause
/// state, and the hint budget.
///
/// The session owns its boards exclusively; nothing outside mutates them.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    difficulty: Difficulty,
    player: String,
    hint_count: u32,
    selected: Option<Position>,
    clock: SessionClock,
}

impl Session {
    /// Starts a new session for a freshly generated puzzle. The clock starts
    /// running immediately and the hint budget is [`DEFAULT_HINT_BUDGET`].
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle, player: impl Into<String>) -> Self {
        Self {
            game: Game::new(puzzle),
            difficulty: puzzle.difficulty,
            player: player.into(),
            hint_count: DEFAULT_HINT_BUDGET,
            selected: None,
            clock: SessionClock::running(),
        }
    }

    /// Restores a session from saved state. The clock resumes from the
    /// saved elapsed time, unpaused.
    #[must_use]
    pub fn resume(
        game: Game,
        difficulty: Difficulty,
        player: impl Into<String>,
        elapsed: Duration,
        hint_count: u32,
    ) -> Self {
        Self {
            game,
            difficulty,
            player: player.into(),
            hint_count,
            selected: None,
            clock: SessionClock::running_from(elapsed),
        }
    }

    /// Returns the underlying game (board, solution, win/conflict queries).
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the session's difficulty tier.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the player's name.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Returns the number of hints remaining.
    #[must_use]
    pub fn hint_count(&self) -> u32 {
        self.hint_count
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Position> {
        self.selected
    }

    /// Selects a cell for subsequent digit input.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given;
    /// the previous selection is kept.
    pub fn select_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.game.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.selected = Some(pos);
        Ok(())
    }

    /// Clears the cell selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Enters a digit value into the selected cell.
    ///
    /// Out-of-range values (anything but 1-9) and input without a selection
    /// are ignored, matching the input boundary: bad keystrokes are not
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the selected cell is
    /// a given (unreachable through [`Session::select_cell`], which rejects
    /// givens).
    pub fn input_digit(&mut self, value: u8) -> Result<(), GameError> {
        let (Some(pos), Some(digit)) = (self.selected, Digit::try_from_value(value)) else {
            log::debug!("ignoring digit input {value} (selection: {:?})", self.selected);
            return Ok(());
        };
        self.game.set_digit(pos, digit)
    }

    /// Clears the selected cell, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the selected cell is
    /// a given (unreachable through [`Session::select_cell`]).
    pub fn clear_selected(&mut self) -> Result<(), GameError> {
        match self.selected {
            Some(pos) => self.game.clear_cell(pos),
            None => Ok(()),
        }
    }

    /// Reveals one cell from the solution and decrements the hint budget,
    /// returning the revealed position.
    ///
    /// A no-op returning `None` when the budget is exhausted or the board
    /// has no empty cells.
    pub fn request_hint(&mut self) -> Option<Position> {
        if self.hint_count == 0 {
            return None;
        }
        let pos = self.game.apply_hint()?;
        self.hint_count -= 1;
        log::info!(
            "hint revealed cell {pos}; {} hint(s) remaining",
            self.hint_count
        );
        Some(pos)
    }

    /// Pauses or resumes the session clock.
    pub fn toggle_pause(&mut self) {
        self.clock.toggle();
    }

    /// Returns whether the session is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Returns elapsed play time, excluding paused stretches.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Returns whether the board matches the solution cell for cell.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.game.check_win()
    }

    /// Returns the underlying game mutably, for direct board edits that
    /// bypass the selection flow.
    #[must_use]
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::DigitGrid;
    use ninefold_generator::PuzzleGenerator;

    use super::*;

    fn easy_session(seed: u64) -> Session {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(Difficulty::Easy, seed)
            .unwrap();
        Session::new(&puzzle, "Ann")
    }

    #[test]
    fn test_new_session_defaults() {
        let session = easy_session(1);
        assert_eq!(session.player(), "Ann");
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert_eq!(session.hint_count(), DEFAULT_HINT_BUDGET);
        assert_eq!(session.selected_cell(), None);
        assert!(!session.is_paused());
        assert!(!session.is_won());
    }

    #[test]
    fn test_select_rejects_given_cells() {
        let mut session = easy_session(1);
        let given = Position::ALL
            .into_iter()
            .find(|&pos| session.game().cell(pos).is_given())
            .unwrap();
        let empty = Position::ALL
            .into_iter()
            .find(|&pos| session.game().cell(pos).is_empty())
            .unwrap();

        assert_eq!(
            session.select_cell(given),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(session.selected_cell(), None);

        session.select_cell(empty).unwrap();
        assert_eq!(session.selected_cell(), Some(empty));
    }

    #[test]
    fn test_input_digit_ignores_invalid_values() {
        let mut session = easy_session(1);
        let empty = Position::ALL
            .into_iter()
            .find(|&pos| session.game().cell(pos).is_empty())
            .unwrap();

        // No selection yet.
        session.input_digit(5).unwrap();
        assert!(session.game().cell(empty).is_empty());

        session.select_cell(empty).unwrap();
        session.input_digit(0).unwrap();
        session.input_digit(10).unwrap();
        assert!(session.game().cell(empty).is_empty());

        session.input_digit(5).unwrap();
        assert_eq!(session.game().cell(empty).as_digit(), Some(Digit::D5));

        session.clear_selected().unwrap();
        assert!(session.game().cell(empty).is_empty());
    }

    #[test]
    fn test_hint_budget_flow() {
        let mut session = easy_session(2);
        let before = session.game().board().count_empty();

        let pos = session.request_hint().expect("budget and empties remain");
        assert_eq!(session.hint_count(), DEFAULT_HINT_BUDGET - 1);
        assert_eq!(
            session.game().cell(pos).as_digit(),
            session.game().solution().get(pos)
        );
        assert_eq!(session.game().board().count_empty(), before - 1);

        session.request_hint().unwrap();
        session.request_hint().unwrap();
        assert_eq!(session.hint_count(), 0);

        // Budget exhausted: board and budget unchanged.
        let board = session.game().board();
        assert_eq!(session.request_hint(), None);
        assert_eq!(session.hint_count(), 0);
        assert_eq!(session.game().board(), board);
    }

    #[test]
    fn test_hint_on_full_board_keeps_budget() {
        let solved: DigitGrid =
            "185362947793148526246795183564239871931874265827516394318427659672951438459683712"
                .parse()
                .unwrap();
        let game = Game::from_parts(&solved, &solved, &DigitGrid::new()).unwrap();
        let mut session = Session::resume(game, Difficulty::Easy, "Ann", Duration::ZERO, 3);

        assert_eq!(session.request_hint(), None);
        assert_eq!(session.hint_count(), 3);
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let clock = SessionClock::paused_at(Duration::from_secs(125));
        assert!(clock.is_paused());
        assert_eq!(clock.elapsed(), Duration::from_secs(125));
        assert_eq!(clock.elapsed(), Duration::from_secs(125));

        let mut clock = clock;
        clock.resume();
        assert!(!clock.is_paused());
        assert!(clock.elapsed() >= Duration::from_secs(125));

        clock.pause();
        let frozen = clock.elapsed();
        assert_eq!(clock.elapsed(), frozen);
    }

    #[test]
    fn test_toggle_pause() {
        let mut session = easy_session(3);
        assert!(!session.is_paused());
        session.toggle_pause();
        assert!(session.is_paused());
        let frozen = session.elapsed();
        assert_eq!(session.elapsed(), frozen);
        session.toggle_pause();
        assert!(!session.is_paused());
    }

    #[test]
    fn test_resume_carries_saved_state() {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(Difficulty::Hard, 9)
            .unwrap();
        let game = Game::new(&puzzle);
        let session = Session::resume(
            game,
            Difficulty::Hard,
            "Ann",
            Duration::from_secs(125),
            1,
        );

        assert_eq!(session.hint_count(), 1);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert!(session.elapsed() >= Duration::from_secs(125));
        assert!(!session.is_paused());
    }

    #[test]
    fn test_fill_from_solution_wins() {
        let mut session = easy_session(42);
        let solution = session.game().solution().clone();
        for pos in Position::ALL {
            if session.game().cell(pos).is_empty() {
                session
                    .game_mut()
                    .set_digit(pos, solution.get(pos).unwrap())
                    .unwrap();
            }
        }
        assert!(session.is_won());
    }
}
