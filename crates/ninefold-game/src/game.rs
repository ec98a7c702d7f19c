use ninefold_core::{Digit, DigitGrid, Position};
use ninefold_generator::GeneratedPuzzle;

use crate::{CellState, GameError};

/// A Sudoku board in play.
///
/// Tracks given (initial) cells and player input separately, and keeps the
/// generated solution for win checks and hints. Conflicting player entries
/// are accepted; the presentation layer queries [`Game::is_conflicting`] to
/// highlight them instead of blocking input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Every non-empty cell of the problem grid becomes a given; the rest
    /// start empty.
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem.get(pos) {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution: puzzle.solution.clone(),
        }
    }

    /// Restores a game from a problem grid, solution grid, and the player's
    /// filled grid (used when loading a save).
    ///
    /// Cells present in `problem` become givens; remaining digits in
    /// `filled` become player-filled cells.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InconsistentRestore`] if `filled` holds a digit
    /// different from the given at the same position.
    pub fn from_parts(
        problem: &DigitGrid,
        solution: &DigitGrid,
        filled: &DigitGrid,
    ) -> Result<Self, GameError> {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            match (problem.get(pos), filled.get(pos)) {
                (Some(given), Some(entered)) if given != entered => {
                    return Err(GameError::InconsistentRestore);
                }
                (Some(given), _) => cells[pos.index()] = CellState::Given(given),
                (None, Some(entered)) => cells[pos.index()] = CellState::Filled(entered),
                (None, None) => {}
            }
        }
        Ok(Self {
            cells,
            solution: solution.clone(),
        })
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the stored solution grid.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the current board (givens plus player input) as a grid.
    #[must_use]
    pub fn board(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Returns the problem grid: the givens only.
    #[must_use]
    pub fn problem(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            if let CellState::Given(digit) = self.cell(pos) {
                grid.set(pos, Some(digit));
            }
        }
        grid
    }

    /// Places a player digit at the given position, replacing any previous
    /// player digit there.
    ///
    /// The placement is accepted even if it conflicts with a peer or
    /// disagrees with the solution.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player digit at the given position. Clearing an empty
    /// cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Returns whether the digit at `pos` duplicates a digit in its row,
    /// column, or box.
    ///
    /// Empty cells never conflict. Used for live highlight of rule-breaking
    /// entries.
    #[must_use]
    pub fn is_conflicting(&self, pos: Position) -> bool {
        let Some(digit) = self.cell(pos).as_digit() else {
            return false;
        };
        pos.house_peers()
            .any(|peer| self.cell(peer).as_digit() == Some(digit))
    }

    /// Returns whether the board matches the stored solution cell for cell.
    ///
    /// Note this is deliberately stricter than "any valid completion": a
    /// puzzle with an alternate solution only wins when it matches the grid
    /// the problem was generated from.
    #[must_use]
    pub fn check_win(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self.cell(pos).as_digit() == self.solution.get(pos))
    }

    /// Chooses the cell the next hint should reveal, or `None` when the
    /// board has no empty cells.
    ///
    /// For every empty cell, scores the sum of empty-cell counts in its
    /// row, column, and box, and picks the maximum; ties go to the first
    /// cell in row-major order. Revealing where emptiness clusters gives
    /// the player the most leverage.
    #[must_use]
    pub fn hint_target(&self) -> Option<Position> {
        let mut row_empty = [0u8; 9];
        let mut column_empty = [0u8; 9];
        let mut box_empty = [0u8; 9];
        for pos in Position::ALL {
            if self.cell(pos).is_empty() {
                row_empty[usize::from(pos.y())] += 1;
                column_empty[usize::from(pos.x())] += 1;
                box_empty[usize::from(pos.box_index())] += 1;
            }
        }

        let mut best: Option<(Position, u8)> = None;
        for pos in Position::ALL {
            if !self.cell(pos).is_empty() {
                continue;
            }
            let score = row_empty[usize::from(pos.y())]
                + column_empty[usize::from(pos.x())]
                + box_empty[usize::from(pos.box_index())];
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Reveals the hint target by filling it with the solution's digit,
    /// returning the revealed position, or `None` when the board is full.
    pub fn apply_hint(&mut self) -> Option<Position> {
        let pos = self.hint_target()?;
        let digit = self
            .solution
            .get(pos)
            .unwrap_or_else(|| unreachable!("solution grids are complete"));
        self.cells[pos.index()] = CellState::Filled(digit);
        Some(pos)
    }
}
