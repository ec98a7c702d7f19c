use ninefold_core::{Digit, DigitGrid, Position};
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

use crate::{Difficulty, backtrack};

/// Configuration for puzzle generation.
///
/// Removal counts default to the fixed per-tier values from
/// [`Difficulty::cells_to_remove`]; overriding them allows testing other
/// tiers without touching process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Cells blanked for [`Difficulty::Easy`].
    pub easy_removals: usize,
    /// Cells blanked for [`Difficulty::Hard`].
    pub hard_removals: usize,
    /// Attempts before a backtracking exhaustion is reported as an error.
    ///
    /// Diagonal-seeded grids are always completable, so in normal operation
    /// the first attempt succeeds; the retry bound exists to surface an
    /// internal-invariant violation instead of looping forever.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            easy_removals: Difficulty::Easy.cells_to_remove(),
            hard_removals: Difficulty::Hard.cells_to_remove(),
            max_attempts: 8,
        }
    }
}

impl GeneratorConfig {
    fn removals_for(self, difficulty: Difficulty) -> usize {
        let removals = match difficulty {
            Difficulty::Easy => self.easy_removals,
            Difficulty::Hard => self.hard_removals,
        };
        removals.min(81)
    }
}

/// A generated puzzle: the problem grid, its solution, and the seed that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid with clues removed.
    pub problem: DigitGrid,
    /// The complete solution the problem was derived from.
    pub solution: DigitGrid,
    /// The difficulty the problem was generated for.
    pub difficulty: Difficulty,
    /// RNG seed; [`PuzzleGenerator::generate_with_seed`] with this value
    /// reproduces the puzzle exactly.
    pub seed: u64,
}

/// Error returned when generation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The backtracking search failed to complete a diagonal-seeded grid
    /// within the configured attempt budget. This indicates an internal
    /// invariant violation rather than an expected runtime condition.
    #[display("backtracking search exhausted after {attempts} attempts")]
    SearchExhausted {
        /// Number of attempts made before giving up.
        attempts: usize,
    },
}

/// Generates Sudoku puzzles.
///
/// The generator is stateless between calls; all randomness comes from a
/// seed, either supplied by the caller or drawn freshly per call. The
/// resulting problem is **not** checked for uniqueness of solution: with the
/// fixed removal counts alternate solutions are rare, and the game's win
/// check compares against the recorded solution.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(Difficulty::Hard).unwrap();
/// assert_eq!(puzzle.problem.count_empty(), 50);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with an explicit configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// The seed is recorded in the returned [`GeneratedPuzzle`] so the
    /// result can be reproduced later.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::SearchExhausted`] if the solver fails
    /// within the configured attempt budget (an internal invariant
    /// violation; see [`GeneratorConfig::max_attempts`]).
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(difficulty, rand::rng().random())
    }

    /// Generates a puzzle deterministically from the given seed.
    ///
    /// The same `(difficulty, seed)` pair always yields a bit-identical
    /// `(problem, solution)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::SearchExhausted`] if the solver fails
    /// within the configured attempt budget.
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let solution = self.complete_board(&mut rng)?;
        debug_assert!(solution.is_solved_grid());

        let mut problem = solution.clone();
        let mut positions = Position::ALL;
        positions.shuffle(&mut rng);
        for &pos in &positions[..self.config.removals_for(difficulty)] {
            problem.set(pos, None);
        }

        Ok(GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        })
    }

    fn complete_board(&self, rng: &mut Pcg64Mcg) -> Result<DigitGrid, GeneratorError> {
        let attempts = self.config.max_attempts.max(1);
        for attempt in 1..=attempts {
            let mut grid = DigitGrid::new();
            fill_diagonal(&mut grid, rng);
            if backtrack::complete_grid(&mut grid) {
                return Ok(grid);
            }
            // A diagonal-seeded grid is always satisfiable, so reaching this
            // point means the search itself is broken.
            log::warn!("backtracking search exhausted on attempt {attempt}; reseeding diagonal");
        }
        Err(GeneratorError::SearchExhausted { attempts })
    }
}

/// Fills the three diagonal boxes ((0,0), (3,3), (6,6)) with independent
/// random permutations of 1-9.
///
/// The diagonal boxes share no houses with each other, so any combination of
/// permutations is a consistent partial grid.
fn fill_diagonal(grid: &mut DigitGrid, rng: &mut Pcg64Mcg) {
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (cell, digit) in (0..9).zip(digits) {
            grid.set(Position::from_box(box_index, cell), Some(digit));
        }
    }
}
