/// Errors from game and session commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The targeted cell is a given (clue) cell and cannot be selected,
    /// modified, or cleared.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// A player grid disagrees with the problem grid it was restored
    /// against.
    #[display("restored player grid overlaps a given cell")]
    InconsistentRestore,
}
