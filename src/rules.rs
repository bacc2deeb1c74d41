//! Win and draw detection. Everything here is a pure function of the board.

use crate::board::{Board, Cell, Mark};

/// The eight lines of three: rows, then columns, then the two diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
    [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)],
    [Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)],
    [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
    [Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)],
    [Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)],
    [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)],
    [Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)],
];

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win(mark) => write!(f, "{} won!", mark),
            Self::Draw => write!(f, "Draw!"),
        }
    }
}

/// The mark occupying a whole row, column or diagonal, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|[a, b, c]| {
        let mark = board.get(*a)?;
        (board.get(*b) == Some(mark) && board.get(*c) == Some(mark)).then_some(mark)
    })
}

/// Whether no empty cell remains.
pub fn is_full(board: &Board) -> bool {
    board.empty_cells().next().is_none()
}

/// `None` while the game is still in progress. A completed line takes
/// precedence over a full board.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(mark) => Some(Outcome::Win(mark)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}

/// The first empty cell, in row-major order, that would complete a line
/// for `mark`.
pub fn winning_cell(board: &Board, mark: Mark) -> Option<Cell> {
    board
        .empty_cells()
        .find(|&cell| winner(&board.with(cell, mark)) == Some(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn every_line_wins_for_either_mark() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let mut b = Board::new();
                for cell in line {
                    b.place(cell, mark).unwrap();
                }
                assert_eq!(winner(&b), Some(mark), "line {:?}", line);
                assert_eq!(outcome(&b), Some(Outcome::Win(mark)));
            }
        }
    }

    #[test]
    fn empty_and_partial_boards_have_no_winner() {
        assert_eq!(winner(&Board::new()), None);
        assert_eq!(outcome(&Board::new()), None);
        assert_eq!(winner(&board("XX./OO./...")), None);
        assert!(!is_full(&board("XX./OO./...")));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let b = board("XOX/XOO/OXX");
        assert!(is_full(&b));
        assert_eq!(winner(&b), None);
        assert_eq!(outcome(&b), Some(Outcome::Draw));
    }

    #[test]
    fn full_board_with_line_is_a_win() {
        let b = board("XXX/OOX/XOO");
        assert!(is_full(&b));
        assert_eq!(outcome(&b), Some(Outcome::Win(Mark::X)));
    }

    #[test]
    fn winning_cell_scans_row_major() {
        // O can finish the top row at (0, 2) or the left column at (2, 0).
        let b = board("OO./O../.XX");
        assert_eq!(winning_cell(&b, Mark::O), Some(Cell::new(0, 2)));
        assert_eq!(winning_cell(&b, Mark::X), Some(Cell::new(2, 0)));
        assert_eq!(winning_cell(&Board::new(), Mark::X), None);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::Win(Mark::X).to_string(), "X won!");
        assert_eq!(Outcome::Win(Mark::O).to_string(), "O won!");
        assert_eq!(Outcome::Draw.to_string(), "Draw!");
    }
}
