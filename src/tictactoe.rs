//! Tic-Tac-Toe as a [`GameState`]: a board plus the mark to move.

use crate::board::{Board, Cell, Mark, CELLS};
use crate::error::{Error, Result};
use crate::game::{Evaluation, GameState, Player};
use crate::rules::{self, Outcome};

#[derive(Hash, Clone, Copy, Eq, PartialEq, Debug)]
pub struct TicTacToe {
    board: Board,
    to_move: Mark,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// An empty board with X to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Mark::X)
    }

    pub fn from_board(board: Board, to_move: Mark) -> Self {
        Self { board, to_move }
    }

    /// The state after `to_move` marks `cell`. The cell is not checked.
    pub fn do_move(&self, cell: Cell) -> Self {
        Self {
            board: self.board.with(cell, self.to_move),
            to_move: self.to_move.opponent(),
        }
    }

    /// Like [`TicTacToe::do_move`], but refuses occupied cells and finished games.
    pub fn play(&self, cell: Cell) -> Result<Self> {
        if let Some(Outcome::Win(winner)) = self.outcome() {
            return Err(Error::GameOver { winner });
        }
        let mut board = self.board;
        board.place(cell, self.to_move)?;
        Ok(Self {
            board,
            to_move: self.to_move.opponent(),
        })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        rules::outcome(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }
}

impl GameState for TicTacToe {
    type Move = Cell;

    fn evaluate(&self) -> Evaluation {
        match self.outcome() {
            Some(Outcome::Win(mark)) => Evaluation::Exact(mark.player().sign()),
            Some(Outcome::Draw) => Evaluation::Exact(0),
            None => Evaluation::Ongoing,
        }
    }

    fn moves(&self) -> impl IntoIterator<Item = (Cell, Self)> {
        let mut res_vec: Vec<(Cell, TicTacToe)> = Vec::with_capacity(CELLS);

        for cell in self.board.empty_cells() {
            res_vec.push((cell, self.do_move(cell)));
        }

        res_vec
    }

    fn turn(&self) -> Player {
        self.to_move.player()
    }

    // One more than the longest game, so the slowest win still beats a draw.
    fn win_value(&self) -> i32 {
        CELLS as i32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_alternate_marks() {
        let game = TicTacToe::new().do_move(Cell::CENTER);
        assert_eq!(game.board().get(Cell::CENTER), Some(Mark::X));
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.turn(), Player::Minimizing);

        let children: Vec<(Cell, TicTacToe)> = game.moves().into_iter().collect();
        assert_eq!(children.len(), 8);
        assert_eq!(children[0].0, Cell::new(0, 0));
        assert!(children
            .iter()
            .all(|(cell, child)| child.board().get(*cell) == Some(Mark::O)));
    }

    #[test]
    fn evaluate_signs_results() {
        let x_won = TicTacToe::from_board("XXX/OO./...".parse().unwrap(), Mark::O);
        let o_won = TicTacToe::from_board("OOO/XX./X..".parse().unwrap(), Mark::X);
        let draw = TicTacToe::from_board("XOX/XOO/OXX".parse().unwrap(), Mark::O);
        assert_eq!(x_won.evaluate(), Evaluation::Exact(1));
        assert_eq!(o_won.evaluate(), Evaluation::Exact(-1));
        assert_eq!(draw.evaluate(), Evaluation::Exact(0));
        assert_eq!(TicTacToe::new().evaluate(), Evaluation::Ongoing);
    }

    #[test]
    fn play_checks_legality() {
        let game = TicTacToe::new().play(Cell::CENTER).unwrap();
        assert_eq!(
            game.play(Cell::CENTER),
            Err(Error::Occupied { cell: Cell::CENTER })
        );

        let over = TicTacToe::from_board("XXX/OO./...".parse().unwrap(), Mark::O);
        assert_eq!(
            over.play(Cell::new(2, 2)),
            Err(Error::GameOver { winner: Mark::X })
        );
    }
}
