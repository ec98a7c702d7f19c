use ninefold_core::GridParseError;
use ninefold_game::GameError;
use ninefold_generator::GeneratorError;
use ninefold_store::StoreError;

/// Top-level CLI errors.
///
/// "No save available" is deliberately not here: a missing save is a normal
/// outcome reported by the affected command, not a failure.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Puzzle generation failed (internal invariant violation).
    Generate(#[from] GeneratorError),
    /// A game command was rejected.
    Game(#[from] GameError),
    /// The save store could not be written.
    Store(#[from] StoreError),
    /// A saved grid string could not be parsed.
    Grid(#[from] GridParseError),
    /// No save file path was given and the platform has no data directory.
    #[display("no data directory available; pass --save-file")]
    NoSavePath,
    /// A cell coordinate was outside the 9×9 board.
    #[display("cell ({x}, {y}) is outside the board; coordinates are 0-8")]
    CellOutOfRange {
        /// Column argument as given.
        x: u8,
        /// Row argument as given.
        y: u8,
    },
}
