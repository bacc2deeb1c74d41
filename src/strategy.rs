//! CPU move selection.
//!
//! A [`Cpu`] runs a short chain of rules before falling back to a full
//! minimax search. The rules are tried in strict priority order:
//!
//! 1. the opening book (when enabled): take the center on the first reply,
//!    then play an edge from the center on the second;
//! 2. complete a line of our own;
//! 3. block a line the opponent would complete next turn;
//! 4. minimax.
//!
//! Minimax alone would find the same wins and blocks. The chain keeps the
//! opening bias and answers forced positions without a search.

use std::fmt::{Display, Formatter};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell, Mark};
use crate::error::{Error, Result};
use crate::minimax::MinimaxBot;
use crate::rules;
use crate::tictactoe::TicTacToe;

/// Which rule of the chain produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    OpeningBook,
    Win,
    Block,
    Minimax,
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::OpeningBook => "opening book",
            Self::Win => "win",
            Self::Block => "block",
            Self::Minimax => "minimax",
        };
        f.pad(name)
    }
}

/// A selected move and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decision {
    pub cell: Cell,
    pub rule: Rule,
}

/// How minimax picks among equally scored moves.
#[derive(Clone, Debug)]
pub enum TieBreak<R> {
    /// The first tied cell in row-major order.
    FirstFound,
    /// A uniformly random tied cell.
    Random(R),
}

/// The opening book move for `mover`, if one applies.
///
/// With eight empty cells and the center free, take the center. With six
/// empty cells and the center ours, take the first free edge, unless the
/// opponent is one move from a line (that is left to the block rule).
pub fn opening_move(board: &Board, mover: Mark) -> Option<Cell> {
    match board.empty_count() {
        8 if board.is_empty(Cell::CENTER) => Some(Cell::CENTER),
        6 if board.get(Cell::CENTER) == Some(mover)
            && blocking_move(board, mover).is_none() =>
        {
            Cell::EDGES.into_iter().find(|&cell| board.is_empty(cell))
        }
        _ => None,
    }
}

/// A cell that wins on the spot for `mover`.
pub fn winning_move(board: &Board, mover: Mark) -> Option<Cell> {
    rules::winning_cell(board, mover)
}

/// A cell the opponent of `mover` would win with next turn.
pub fn blocking_move(board: &Board, mover: Mark) -> Option<Cell> {
    rules::winning_cell(board, mover.opponent())
}

/// A computer player.
#[derive(Clone, Debug)]
pub struct Cpu<R = SmallRng> {
    bot: MinimaxBot<TicTacToe>,
    opening_book: bool,
    tie_break: TieBreak<R>,
}

impl Cpu<SmallRng> {
    /// The human-vs-CPU opponent: opening book on, deterministic ties.
    pub fn opponent() -> Self {
        Self::new(true, TieBreak::FirstFound)
    }

    /// A CPU-vs-CPU player seeded from the thread-local generator.
    pub fn self_play_from_entropy() -> Self {
        Self::self_play(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Cpu<R> {
    pub fn new(opening_book: bool, tie_break: TieBreak<R>) -> Self {
        Self {
            bot: MinimaxBot::new(),
            opening_book,
            tie_break,
        }
    }

    /// The CPU-vs-CPU player: no opening book, random ties.
    pub fn self_play(rng: R) -> Self {
        Self::new(false, TieBreak::Random(rng))
    }

    /// Chooses a cell for `mover`.
    ///
    /// The board must still be in play: a decided board yields
    /// [`Error::GameOver`] and a full one [`Error::NoEmptyCells`].
    pub fn select(&mut self, board: &Board, mover: Mark) -> Result<Decision> {
        if let Some(winner) = rules::winner(board) {
            return Err(Error::GameOver { winner });
        }
        if rules::is_full(board) {
            return Err(Error::NoEmptyCells);
        }

        let book = self
            .opening_book
            .then(|| opening_move(board, mover))
            .flatten()
            .map(|cell| (cell, Rule::OpeningBook));
        let forced = book
            .or_else(|| winning_move(board, mover).map(|cell| (cell, Rule::Win)))
            .or_else(|| blocking_move(board, mover).map(|cell| (cell, Rule::Block)));

        let (cell, rule) = match forced {
            Some(forced) => forced,
            None => (self.search(board, mover)?, Rule::Minimax),
        };

        log::debug!("{:<32}{:<16}{:<16}", format!("{} plays {}", mover, cell), "by", rule);
        Ok(Decision { cell, rule })
    }

    fn search(&mut self, board: &Board, mover: Mark) -> Result<Cell> {
        let game = TicTacToe::from_board(*board, mover);
        let best = match &mut self.tie_break {
            TieBreak::FirstFound => self.bot.best_move(&game),
            TieBreak::Random(rng) => self.bot.best_move_with(&game, rng),
        };
        best.map(|(_, cell)| cell).ok_or(Error::NoEmptyCells)
    }
}
