//! Depth-first backtracking completion of a partial grid.

use ninefold_core::{Digit, DigitGrid, Position};

/// Fills every empty cell of `grid` with the first solution found by
/// depth-first search, returning whether the search succeeded.
///
/// Cells are visited in row-major order and candidate digits are tried in
/// ascending order, so the result is deterministic for a given starting
/// grid. Pre-filled cells are never revisited. On failure the grid is
/// restored to its input state.
pub fn complete_grid(grid: &mut DigitGrid) -> bool {
    fill_from(grid, 0)
}

fn fill_from(grid: &mut DigitGrid, start: usize) -> bool {
    let Some(pos) = next_empty(grid, start) else {
        return true;
    };
    for digit in Digit::ALL {
        if grid.is_valid_placement(pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, pos.index() + 1) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

fn next_empty(grid: &DigitGrid, start: usize) -> Option<Position> {
    Position::ALL[start..]
        .iter()
        .copied()
        .find(|&pos| grid.get(pos).is_none())
}
