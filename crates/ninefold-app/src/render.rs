//! Plain-text board rendering.

use std::fmt::Write as _;

use ninefold_core::Position;
use ninefold_game::{Game, Session};

/// Renders the board as a 9×9 text grid with 3×3 box separators.
/// Conflicting entries are marked with a trailing `!`.
#[must_use]
pub fn board(game: &Game) -> String {
    let mut out = String::new();
    for y in 0..9 {
        if y > 0 && y % 3 == 0 {
            out.push_str("------+-------+------\n");
        }
        for x in 0..9 {
            if x > 0 && x % 3 == 0 {
                out.push_str("| ");
            }
            let pos = Position::new(x, y);
            match game.cell(pos).as_digit() {
                Some(digit) if game.is_conflicting(pos) => {
                    let _ = write!(out, "{digit}!");
                }
                Some(digit) => {
                    let _ = write!(out, "{digit} ");
                }
                None => out.push_str(". "),
            }
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    out
}

/// Renders the one-line status footer: player, difficulty, time, hints.
#[must_use]
pub fn status(session: &Session) -> String {
    let secs = session.elapsed().as_secs();
    format!(
        "{} | {} | {}:{:02} | {} hint(s) left",
        session.player(),
        session.difficulty(),
        secs / 60,
        secs % 60,
        session.hint_count()
    )
}

#[cfg(test)]
mod tests {
    use ninefold_generator::{Difficulty, PuzzleGenerator};
    use ninefold_game::Session;

    use super::*;

    #[test]
    fn test_board_layout() {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(Difficulty::Easy, 1)
            .unwrap();
        let session = Session::new(&puzzle, "Ann");
        let text = board(session.game());

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[7], "------+-------+------");
        assert_eq!(text.matches('.').count(), 30);
    }

    #[test]
    fn test_status_line() {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(Difficulty::Hard, 1)
            .unwrap();
        let session = Session::new(&puzzle, "Ann");
        let text = status(&session);
        assert!(text.starts_with("Ann | hard | 0:0"));
        assert!(text.ends_with("3 hint(s) left"));
    }
}
