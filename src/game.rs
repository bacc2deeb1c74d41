//! Holds the base trait for a game that [`crate::minimax::MinimaxBot`] can solve.
//! Tic-Tac-Toe implements it in [`crate::tictactoe`].

/// The value returned by an evaluation function.
///
/// - [`Exact`](Evaluation::Exact) is the signed result of a finished game:
///   `1` if the maximizer won, `-1` if the minimizer won, `0` for a draw.
///
/// - [`Ongoing`](Evaluation::Ongoing) marks a game still in progress. The
///   search is exhaustive, so no heuristic estimate is carried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    Exact(i32),
    Ongoing,
}

impl Evaluation {
    /// Whether the game is over.
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// The two players of a zero-sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Maximizing,
    Minimizing,
}

impl Player {
    /// The opposite player.
    pub const fn flip(&self) -> Self {
        match self {
            Self::Maximizing => Self::Minimizing,
            Self::Minimizing => Self::Maximizing,
        }
    }

    /// This is `1` for the maximizer and `-1` for the minimizer.
    pub const fn sign(&self) -> i32 {
        match self {
            Self::Maximizing => 1,
            Self::Minimizing => -1,
        }
    }
}

/// A two-player, zero-sum, finite game.
///
/// To implement this trait, you must implement [`GameState::evaluate`],
/// [`GameState::moves`], and [`GameState::turn`]. You can optionally
/// override [`GameState::win_value`].
pub trait GameState: Sized + Clone {
    /// The action that leads from one state to the next.
    type Move: Copy;

    /// Returns [`Evaluation::Exact`] with the signed result when the game
    /// is over, [`Evaluation::Ongoing`] otherwise.
    fn evaluate(&self) -> Evaluation;

    /// Returns every legal move with the state it leads to.
    ///
    /// The order is significant: searches break ties in favour of the
    /// move yielded first.
    fn moves(&self) -> impl IntoIterator<Item = (Self::Move, Self)>;

    /// Returns the [`Player`] whose turn it is.
    fn turn(&self) -> Player;

    /// Score of a win found immediately after the move being rated.
    /// Each further ply costs one point, so this must exceed the longest
    /// possible game or a slow win would rank below a draw.
    fn win_value(&self) -> i32 {
        100
    }
}
